use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
/// Reports the mail mode so a deploy without a credential is visible.
pub async fn health(State(app_state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "mail": app_state.relay.mode().as_ref(),
        })),
    )
}

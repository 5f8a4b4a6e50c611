use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tooniq_contact::Relay;

use crate::template::{NotFoundTemplate, Template};

mod about;
mod assets;
mod contact;
mod health;
mod index;
mod services;
mod theme;
mod works;

pub use assets::AssetsService;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub relay: Relay,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate::default())
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/services", get(services::page))
        .route("/works", get(works::page))
        .route("/contact", get(contact::page))
        .route("/api/contact", post(contact::api))
        .route("/theme", post(theme::toggle))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}

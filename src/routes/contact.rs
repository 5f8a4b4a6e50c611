use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use strum::VariantArray;
use tooniq_contact::{Category, ContactResponse, ContactSubmission};

use crate::content::{FAQ, Faq};
use crate::{
    routes::AppState,
    template::{MALFORMED_REQUEST_MESSAGE, Page, SERVER_ERROR_MESSAGE, Template, filters},
};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: Page,
    pub categories: &'static [Category],
    pub faq: &'static [Faq],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate {
        page: Page::new("/contact"),
        categories: Category::VARIANTS,
        faq: FAQ,
    })
}

fn reply(status: StatusCode, body: ContactResponse) -> Response {
    (status, Json(body)).into_response()
}

/// `POST /api/contact`: validate, hand to the configured sender, answer with
/// the `{success, data | error}` envelope.
pub async fn api(
    State(app_state): State<AppState>,
    input: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match input {
        Ok(input) => input,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "malformed contact request");

            return reply(
                StatusCode::BAD_REQUEST,
                ContactResponse::failed(MALFORMED_REQUEST_MESSAGE),
            );
        }
    };

    match app_state.relay.submit_form(submission).await {
        Ok(data) => reply(StatusCode::OK, ContactResponse::ok(data)),
        Err(err) if err.is_client_error() => {
            reply(StatusCode::BAD_REQUEST, ContactResponse::failed(err.to_string()))
        }
        Err(err) => {
            tracing::error!(error = %err, mode = %app_state.relay.mode(), "contact email dispatch failed");

            reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                ContactResponse::failed(SERVER_ERROR_MESSAGE),
            )
        }
    }
}

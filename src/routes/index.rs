use axum::response::IntoResponse;

use crate::content::{self, Problem, Service};
use crate::template::{Page, Template, filters};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: Page,
    /// JSON array read by the typewriter script.
    pub phrases: String,
    pub type_speed_ms: u128,
    pub type_hold_ms: u128,
    pub problems: &'static [Problem],
    pub services: &'static [Service],
}

pub async fn page(template: Template) -> impl IntoResponse {
    let phrases = serde_json::to_string(content::HERO_PHRASES).unwrap_or_default();

    template.render(IndexTemplate {
        page: Page::new("/"),
        phrases,
        type_speed_ms: tooniq_motion::DEFAULT_TYPE_SPEED.as_millis(),
        type_hold_ms: tooniq_motion::DEFAULT_HOLD.as_millis(),
        problems: &content::INDUSTRY_PROBLEMS[..3],
        services: content::SERVICES,
    })
}

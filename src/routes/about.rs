use axum::response::IntoResponse;

use crate::content::{
    ACHIEVEMENTS, Achievement, FUTURE_VISION, HISTORY, INDUSTRY_PROBLEMS, LEADERSHIP, Leader,
    Milestone, Problem, Vision,
};
use crate::template::{Page, Template, filters};

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub page: Page,
    pub leadership: &'static [Leader],
    pub history: &'static [Milestone],
    pub achievements: &'static [Achievement],
    pub problems: &'static [Problem],
    pub vision: &'static [Vision],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(AboutTemplate {
        page: Page::new("/about"),
        leadership: LEADERSHIP,
        history: HISTORY,
        achievements: ACHIEVEMENTS,
        problems: INDUSTRY_PROBLEMS,
        vision: FUTURE_VISION,
    })
}

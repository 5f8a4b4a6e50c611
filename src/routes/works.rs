use axum::response::IntoResponse;

use crate::content::{STATS, Stat, WORKS, Work};
use crate::template::{Page, Template, filters};

#[derive(askama::Template)]
#[template(path = "works.html")]
pub struct WorksTemplate {
    pub page: Page,
    pub works: &'static [Work],
    pub stats: &'static [Stat],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(WorksTemplate {
        page: Page::new("/works"),
        works: WORKS,
        stats: STATS,
    })
}

use axum::response::IntoResponse;

use crate::content::{SERVICES, Service};
use crate::template::{Page, Template, filters};

#[derive(askama::Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub page: Page,
    pub services: &'static [Service],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ServicesTemplate {
        page: Page::new("/services"),
        services: SERVICES,
    })
}

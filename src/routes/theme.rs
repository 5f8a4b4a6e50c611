use axum::{
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};

use crate::site::SiteContext;

/// `POST /theme`: flip the theme cookie and send the browser back where it
/// came from. Only same-site paths are honoured.
pub async fn toggle(mut site: SiteContext, headers: HeaderMap) -> impl IntoResponse {
    let theme = site.toggle_theme();
    tracing::debug!(%theme, "theme toggled");

    let back = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(same_site_path)
        .unwrap_or_else(|| "/".to_owned());

    (site.persist(), Redirect::to(&back))
}

fn same_site_path(referer: &str) -> Option<String> {
    if referer.starts_with('/') && !referer.starts_with("//") {
        return Some(referer.to_owned());
    }

    let rest = referer
        .strip_prefix("https://")
        .or_else(|| referer.strip_prefix("http://"))?;
    let path = &rest[rest.find('/')?..];

    Some(path.to_owned())
}

use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const STATIC_MAX_AGE: &str = "public, max-age=31536000, immutable";
const NO_STORE: &str = "no-store, no-cache, must-revalidate, proxy-revalidate";

fn is_static_path(path: &str) -> bool {
    path.starts_with("/static/") || path == "/favicon.ico" || path == "/robots.txt"
}

/// Embedded assets are cached for a year, pages and API answers never are.
/// Pages carry per-browser theme and splash state, so a shared cache must not
/// keep them either.
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_static = is_static_path(req.uri().path());
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    if is_static {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(STATIC_MAX_AGE));
    } else {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(NO_STORE));
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::is_static_path;

    #[test]
    fn static_paths() {
        assert!(is_static_path("/static/css/site.css"));
        assert!(is_static_path("/favicon.ico"));
        assert!(!is_static_path("/contact"));
        assert!(!is_static_path("/api/contact"));
    }
}

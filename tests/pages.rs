use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

mod helpers;

#[tokio::test]
async fn test_pages_render() {
    for (uri, expected) in [
        ("/", "AIで作業から人を解放"),
        ("/about", "大木天翔"),
        ("/services", "AnimaTime"),
        ("/works", "全国大学アニメ制作連携プロジェクト"),
        ("/contact", "技術コンサルティングについて"),
    ] {
        let response = helpers::get(helpers::mock_app(), uri, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let html = helpers::text(response).await;
        assert!(html.contains("合同会社TOONIQ"), "{uri}");
        assert!(html.contains(expected), "{uri} should contain {expected}");
    }
}

#[tokio::test]
async fn test_first_visit_shows_splash_in_dark_theme() {
    let response = helpers::get(helpers::mock_app(), "/", None).await;

    let cookies = helpers::set_cookies(&response);
    assert!(cookies.iter().any(|c| c.starts_with("tooniq-visited=true")));
    assert!(cookies.iter().any(|c| c.starts_with("theme=dark")));

    let html = helpers::text(response).await;
    assert!(html.contains(r#"<html lang="ja" class="dark""#));
    assert!(html.contains(r#"id="splash""#));
    assert!(html.contains(r#"data-failsafe-ms="3000""#));
}

#[tokio::test]
async fn test_motion_settings_reach_the_page() {
    let html = helpers::text(helpers::get(helpers::mock_app(), "/", None).await).await;

    for attribute in [
        r#"data-tilt-max-deg="10""#,
        r#"data-hover-scale="1.05""#,
        r#"data-cursor-radius="16""#,
        r#"data-cursor-pressed-scale="0.8""#,
        r#"data-cursor-link-scale="1.5""#,
        r#"data-touch-breakpoint="768""#,
        r#"data-parallax-offset="50""#,
        r#"data-parallax-opacity="[[0.0,0.4],[0.3,1.0],[0.7,1.0],[1.0,0.4]]""#,
        r#"data-parallax-scale="[[0.0,0.95],[0.5,1.0],[1.0,0.95]]""#,
        r#"data-step-min="10""#,
        r#"data-step-spread="15""#,
        r#"data-speed-ms="100""#,
        r#"data-hold-ms="2000""#,
    ] {
        assert!(html.contains(attribute), "{attribute}");
    }
}

#[tokio::test]
async fn test_returning_visit_skips_splash_and_keeps_theme() {
    let response = helpers::get(
        helpers::mock_app(),
        "/about",
        Some("theme=light; tooniq-visited=true"),
    )
    .await;

    let html = helpers::text(response).await;
    assert!(html.contains(r#"class="light""#));
    assert!(!html.contains(r#"id="splash""#));
}

#[tokio::test]
async fn test_contact_page_lists_categories_and_reset_delay() {
    let html = helpers::text(helpers::get(helpers::mock_app(), "/contact", None).await).await;

    for value in ["general", "product", "consulting", "development", "partnership", "other"] {
        assert!(html.contains(&format!(r#"<option value="{value}">"#)), "{value}");
    }
    assert!(html.contains(r#"data-success-reset-ms="5000""#));
    assert!(html.contains(r#"data-error-reset-ms="""#));
}

#[tokio::test]
async fn test_theme_toggle_redirects_back() {
    let response = helpers::mock_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/theme")
                .header(header::COOKIE, "theme=dark")
                .header(header::REFERER, "http://localhost:3000/works")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/works");
    assert!(
        helpers::set_cookies(&response)
            .iter()
            .any(|c| c.starts_with("theme=light"))
    );
}

#[tokio::test]
async fn test_unknown_path_renders_not_found() {
    let response = helpers::get(helpers::mock_app(), "/recipes", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = helpers::text(response).await;
    assert!(html.contains("お探しのページは見つかりませんでした"));
}

#[tokio::test]
async fn test_health_reports_mail_mode() {
    let response = helpers::get(helpers::mock_app(), "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&helpers::text(response).await).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok", "mail": "mock" }));
}

#[tokio::test]
async fn test_static_assets_are_cached() {
    let response = helpers::get(helpers::mock_app(), "/static/css/site.css", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/css")
    );
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=31536000, immutable"
    );

    let missing = helpers::get(helpers::mock_app(), "/static/nope.js", None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pages_are_not_cached() {
    let response = helpers::get(helpers::mock_app(), "/", None).await;

    assert!(
        response.headers()[header::CACHE_CONTROL]
            .to_str()
            .unwrap()
            .starts_with("no-store")
    );
}

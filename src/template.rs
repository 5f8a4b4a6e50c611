use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

use crate::{
    content::{COMPANY, Company, NAV_ITEMS, NavItem},
    site::SiteContext,
};

pub const SERVER_ERROR_MESSAGE: &str = "メールの送信に失敗しました。しばらく時間をおいて再度お試しください。";
pub const MALFORMED_REQUEST_MESSAGE: &str = "リクエストの形式が正しくありません";

pub(crate) mod filters {
    /// Reads a per-request value set by [`super::Template`], e.g. `{{ "theme"|site }}`.
    #[askama::filter_fn]
    pub fn site(key: &str, values: &dyn askama::Values) -> askama::Result<String> {
        Ok(askama::get_value::<String>(values, key)
            .cloned()
            .unwrap_or_default())
    }
}

/// Page renderer bound to the current request's [`SiteContext`].
pub struct Template {
    site: SiteContext,
    form: crate::config::FormConfig,
}

impl Template {
    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("theme", Box::new(self.site.theme.to_string()));
        values.insert(
            "splash",
            Box::new(if self.site.show_splash { "on" } else { "off" }.to_owned()),
        );
        values.insert(
            "success_reset_ms",
            Box::new(self.form.success_reset_ms.to_string()),
        );
        values.insert(
            "error_reset_ms",
            Box::new(
                self.form
                    .error_reset_ms
                    .map(|ms| ms.to_string())
                    .unwrap_or_default(),
            ),
        );

        for (key, duration) in [
            ("splash_tick_ms", tooniq_motion::SPLASH_TICK),
            ("splash_failsafe_ms", tooniq_motion::SPLASH_FAILSAFE),
            ("splash_hold_ms", tooniq_motion::SPLASH_HOLD),
        ] {
            values.insert(key, Box::new(duration.as_millis().to_string()));
        }

        for (key, value) in [
            ("tilt_max_deg", tooniq_motion::MAX_TILT_DEG),
            ("hover_scale", tooniq_motion::HOVER_SCALE),
            ("cursor_radius", tooniq_motion::CURSOR_RADIUS),
            ("cursor_pressed_scale", tooniq_motion::PRESSED_SCALE),
            ("cursor_link_scale", tooniq_motion::LINK_SCALE),
            ("touch_breakpoint", tooniq_motion::TOUCH_BREAKPOINT),
            ("splash_step_min", tooniq_motion::SPLASH_STEP_MIN),
            ("splash_step_spread", tooniq_motion::SPLASH_STEP_SPREAD),
            ("parallax_offset", tooniq_motion::DEFAULT_PARALLAX_OFFSET),
        ] {
            values.insert(key, Box::new(value.to_string()));
        }

        for (key, stops) in [
            ("parallax_opacity", &tooniq_motion::PARALLAX_OPACITY_STOPS[..]),
            ("parallax_scale", &tooniq_motion::PARALLAX_SCALE_STOPS[..]),
        ] {
            values.insert(key, Box::new(serde_json::to_string(stops).unwrap_or_default()));
        }

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(self, template: T) -> Response {
        self.render_with_status(StatusCode::OK, template)
    }

    /// Renders and writes the site cookies, which also marks the session as
    /// visited so the splash only plays once.
    pub fn render_with_status<T: askama::Template>(self, status: StatusCode, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => (status, self.site.persist(), Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let site = SiteContext::from_request_parts(parts, state).await?;

        Ok(Template {
            site,
            form: state.config.form.clone(),
        })
    }
}

/// Data every page layout needs: navigation, footer copy and the active link.
pub struct Page {
    pub current_path: &'static str,
    pub company: &'static Company,
    pub nav: &'static [NavItem],
}

impl Page {
    pub fn new(current_path: &'static str) -> Self {
        Self {
            current_path,
            company: &COMPANY,
            nav: NAV_ITEMS,
        }
    }

    pub fn is_active(&self, href: &str) -> bool {
        self.current_path == href
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub page: Page,
}

impl Default for NotFoundTemplate {
    fn default() -> Self {
        Self {
            page: Page::new(""),
        }
    }
}

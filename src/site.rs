use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use strum::{AsRefStr, Display, EnumString};

pub const THEME_COOKIE: &str = "theme";
pub const VISITED_COOKIE: &str = "tooniq-visited";

#[derive(EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Per-browser presentation state, read from cookies when a request comes in.
///
/// Nothing is written back until [`SiteContext::persist`] turns the context
/// into cookies for the response. [`SiteContext::clear`] drops both cookies,
/// which brings the splash screen back and the theme to its default.
#[derive(Debug, Clone)]
pub struct SiteContext {
    jar: CookieJar,
    pub theme: Theme,
    /// First page of the browser session.
    pub show_splash: bool,
}

impl SiteContext {
    pub fn from_jar(jar: CookieJar) -> Self {
        let theme = jar
            .get(THEME_COOKIE)
            .and_then(|cookie| cookie.value().parse().ok())
            .unwrap_or_default();
        let show_splash = jar.get(VISITED_COOKIE).is_none();

        Self {
            jar,
            theme,
            show_splash,
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn persist(self) -> CookieJar {
        let theme = Cookie::build((THEME_COOKIE, self.theme.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .max_age(time::Duration::days(365));

        // No max-age: the browser drops it when the session ends.
        let visited = Cookie::build((VISITED_COOKIE, "true"))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true);

        self.jar.add(theme).add(visited)
    }

    pub fn clear(self) -> CookieJar {
        self.jar
            .remove(Cookie::build(THEME_COOKIE).path("/"))
            .remove(Cookie::build(VISITED_COOKIE).path("/"))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for SiteContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_jar(CookieJar::from_headers(&parts.headers)))
    }
}

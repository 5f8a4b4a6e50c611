#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tooniq::{
    AppState, Config,
    config::{EmailConfig, FormConfig, ObservabilityConfig, ServerConfig},
};
use tooniq_contact::Relay;
use tooniq_notification::{ContactEmail, MailSender, MockSender, SendMode};
use tower::ServiceExt;
use tracing::{
    Event, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{Layer, layer::Context};

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        email: EmailConfig::default(),
        form: FormConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn app_with(sender: Arc<dyn MailSender>) -> Router {
    let config = config();
    let relay = Relay::new(sender, config.email.contact_address.to_owned());

    tooniq::app(AppState { config, relay })
}

pub fn mock_app() -> Router {
    app_with(Arc::new(MockSender))
}

/// Live-mode sender whose provider always throws.
pub struct FailingSender;

#[async_trait::async_trait]
impl MailSender for FailingSender {
    fn mode(&self) -> SendMode {
        SendMode::Live
    }

    async fn send(&self, _email: &ContactEmail) -> tooniq_shared::Result<Value> {
        tooniq_shared::bail!("provider rejected the request")
    }
}

/// Live-mode sender that keeps what it was given.
#[derive(Default, Clone)]
pub struct RecordingSender {
    pub sent: Arc<Mutex<Vec<ContactEmail>>>,
}

#[async_trait::async_trait]
impl MailSender for RecordingSender {
    fn mode(&self) -> SendMode {
        SendMode::Live
    }

    async fn send(&self, email: &ContactEmail) -> tooniq_shared::Result<Value> {
        self.sent.lock().unwrap().push(email.clone());

        Ok(json!({ "id": "re_test_1" }))
    }
}

pub fn valid_body() -> Value {
    json!({
        "name": "山田太郎",
        "company": "株式会社サンプル",
        "email": "taro@example.co.jp",
        "phone": "03-1234-5678",
        "category": "development",
        "message": "制作進行ツールの導入を検討しています。\n<b>至急</b> & ご連絡ください",
    })
}

pub async fn post_json(app: Router, body: impl Into<Body>) -> (u16, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_owned)
        .collect()
}

/// Records every event's fields as strings.
#[derive(Clone, Default)]
pub struct CapturedEvents(Arc<Mutex<Vec<BTreeMap<String, String>>>>);

impl CapturedEvents {
    pub fn find(&self, field: &str) -> Option<BTreeMap<String, String>> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .find(|event| event.contains_key(field))
            .cloned()
    }
}

struct FieldMap(BTreeMap<String, String>);

impl Visit for FieldMap {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}

impl<S: Subscriber> Layer<S> for CapturedEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldMap(BTreeMap::new());
        event.record(&mut fields);
        self.0.lock().unwrap().push(fields.0);
    }
}

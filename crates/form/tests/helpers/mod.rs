use std::sync::{Arc, Mutex};

use tokio::sync::Notify;
use tooniq_form::{ContactForm, Field, FormOptions, Reply, SubmitError, SubmitPayload, Transport};

#[derive(Clone)]
pub enum Scripted {
    Reply(u16, &'static str),
    NetworkDown,
}

/// Answers every POST with the scripted outcome and remembers what it was sent.
/// With a gate, the POST waits until the test releases it.
#[derive(Clone)]
pub struct FakeTransport {
    pub outcome: Scripted,
    pub calls: Arc<Mutex<Vec<SubmitPayload>>>,
    pub gate: Option<Arc<Notify>>,
}

impl FakeTransport {
    pub fn new(outcome: Scripted) -> Self {
        Self {
            outcome,
            calls: Arc::default(),
            gate: None,
        }
    }

    #[allow(dead_code)]
    pub fn gated(outcome: Scripted) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let transport = Self {
            gate: Some(gate.clone()),
            ..Self::new(outcome)
        };

        (transport, gate)
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Transport for FakeTransport {
    async fn post(&self, payload: &SubmitPayload) -> Result<Reply, SubmitError> {
        self.calls.lock().unwrap().push(payload.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.outcome {
            Scripted::Reply(status, body) => Ok(Reply {
                status: *status,
                body: body.to_string(),
            }),
            Scripted::NetworkDown => Err(SubmitError::Network("connection refused".to_owned())),
        }
    }
}

pub const OK_BODY: &str = r#"{"success":true,"data":{"id":"mock_1"}}"#;

pub fn filled_form(transport: FakeTransport) -> ContactForm<FakeTransport> {
    let mut form = ContactForm::new(transport, FormOptions::default());
    form.update_field(Field::Name, "山田太郎");
    form.update_field(Field::Email, "taro@example.co.jp");
    form.update_field(Field::Category, "development");
    form.update_field(Field::Message, "お見積りをお願いします");
    form
}

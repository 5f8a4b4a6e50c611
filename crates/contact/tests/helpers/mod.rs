use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use tooniq_contact::{ContactSubmission, Relay};
use tooniq_notification::{ContactEmail, MailSender, SendMode};

pub const INBOX: &str = "contact@tooniq.localhost";

/// Keeps every email it is asked to send.
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
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());

        Ok(json!({ "id": format!("rec_{}", sent.len()) }))
    }
}

/// Provider that is always down.
pub struct FailingSender;

#[async_trait::async_trait]
impl MailSender for FailingSender {
    fn mode(&self) -> SendMode {
        SendMode::Live
    }

    async fn send(&self, _email: &ContactEmail) -> tooniq_shared::Result<Value> {
        tooniq_shared::bail!("provider unavailable")
    }
}

#[allow(dead_code)]
pub fn recording_relay() -> (Relay, RecordingSender) {
    let sender = RecordingSender::default();
    (Relay::new(Arc::new(sender.clone()), INBOX), sender)
}

pub fn submission(name: impl Into<String>) -> ContactSubmission {
    let name = name.into();

    ContactSubmission {
        email: format!("{name}@example.localhost"),
        name,
        message: "my message".to_owned(),
        ..Default::default()
    }
}

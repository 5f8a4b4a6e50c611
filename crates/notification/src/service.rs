//! Mail senders the relay can be wired with.

use std::{fmt, sync::Arc};

use anyhow::Context;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;
use serde_json::{Value, json};
use strum::{AsRefStr, Display};
use tracing::info;

use crate::{ContactEmail, MockSender};

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum SendMode {
    Mock,
    Live,
}

#[async_trait::async_trait]
pub trait MailSender: Send + Sync {
    fn mode(&self) -> SendMode;

    /// Dispatch the email once. The returned value is handed back to the
    /// submitter as the response `data`.
    async fn send(&self, email: &ContactEmail) -> tooniq_shared::Result<Value>;
}

#[derive(Deserialize, Clone)]
pub struct EmailConfig {
    /// Provider credential. Empty selects the mock sender.
    #[serde(default)]
    pub resend_api_key: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_smtp_username")]
    pub smtp_username: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: String::new(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: default_smtp_username(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
        }
    }
}

impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field(
                "resend_api_key",
                &if self.resend_api_key.is_empty() { "" } else { "<redacted>" },
            )
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("from_address", &self.from_address)
            .field("contact_address", &self.contact_address)
            .finish()
    }
}

impl EmailConfig {
    pub fn mode(&self) -> SendMode {
        if self.resend_api_key.is_empty() {
            SendMode::Mock
        } else {
            SendMode::Live
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.resend.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_smtp_username() -> String {
    "resend".to_string()
}

fn default_from_address() -> String {
    "TOONIQ Contact <onboarding@resend.dev>".to_string()
}

fn default_contact_address() -> String {
    "contact@tooniq.co.jp".to_string()
}

/// Pick the sender once, at start-up, from whether a credential is configured.
pub fn sender_from_config(config: &EmailConfig) -> anyhow::Result<Arc<dyn MailSender>> {
    Ok(match config.mode() {
        SendMode::Mock => {
            info!("Mail provider credential not configured, contact submissions are only logged");
            Arc::new(MockSender)
        }
        SendMode::Live => Arc::new(SmtpSender::new(config)?),
    })
}

/// Live sender relaying through the provider's SMTP endpoint.
#[derive(Clone)]
pub struct SmtpSender {
    mailer: SmtpTransport,
    from: Mailbox,
}

impl SmtpSender {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        info!(
            smtp_host = %config.smtp_host,
            smtp_port = config.smtp_port,
            from = %config.from_address,
            "Email service initialized with authentication and TLS"
        );

        let creds = Credentials::new(
            config.smtp_username.clone(),
            config.resend_api_key.clone(),
        );

        let mailer = SmtpTransport::relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(creds)
            .build();

        let from = config
            .from_address
            .parse()
            .context("Failed to parse from address")?;

        Ok(Self { mailer, from })
    }
}

#[async_trait::async_trait]
impl MailSender for SmtpSender {
    fn mode(&self) -> SendMode {
        SendMode::Live
    }

    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn send(&self, email: &ContactEmail) -> tooniq_shared::Result<Value> {
        let message_id = format!("<{}@{}>", ulid::Ulid::new(), self.from.email.domain());

        let message = Message::builder()
            .from(self.from.clone())
            .reply_to(
                email
                    .reply_to
                    .parse()
                    .context("Failed to parse reply-to address")?,
            )
            .to(email.to.parse().context("Failed to parse recipient")?)
            .subject(email.subject.clone())
            .message_id(Some(message_id.clone()))
            .multipart(MultiPart::alternative_plain_html(
                email.plain()?,
                email.html()?,
            ))
            .context("Failed to build contact email")?;

        info!("Sending email");

        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .context("Mail dispatch task aborted")?
            .context("SMTP relay rejected contact email")?;

        Ok(json!({ "id": message_id }))
    }
}

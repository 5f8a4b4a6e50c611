use serde_json::{Value, json};
use time::OffsetDateTime;
use tracing::info;

use crate::{ContactEmail, MailSender, SendMode};

pub const MOCK_MESSAGE: &str = "モックモード: メール送信をシミュレーションしました";

/// Stands in for the provider when no credential is configured. Nothing leaves
/// the process; the would-be email is written to the log instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSender;

#[async_trait::async_trait]
impl MailSender for MockSender {
    fn mode(&self) -> SendMode {
        SendMode::Mock
    }

    async fn send(&self, email: &ContactEmail) -> tooniq_shared::Result<Value> {
        let submission = &email.submission;

        info!(
            mode = %SendMode::Mock,
            to = %email.to,
            reply_to = %email.reply_to,
            subject = %email.subject,
            name = %submission.name,
            company = %submission.company,
            email = %submission.email,
            phone = %submission.phone,
            category = %email.category_label,
            body = %submission.message,
            "Contact email simulated, set a provider credential to deliver it"
        );

        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

        Ok(json!({
            "id": format!("mock_{millis}"),
            "message": MOCK_MESSAGE,
        }))
    }
}

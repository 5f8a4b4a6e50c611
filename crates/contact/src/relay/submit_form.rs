use serde_json::Value;
use tooniq_notification::{ContactEmail, accepts_reply_to};
use tooniq_shared::contact::{ContactSubmission, Rejection};

impl super::Relay {
    pub async fn submit_form(&self, input: ContactSubmission) -> tooniq_shared::Result<Value> {
        if let Err(rejection) = input.check() {
            tracing::debug!(%rejection, "contact submission rejected");
            return Err(rejection.into());
        }

        if !accepts_reply_to(&input.email) {
            tracing::debug!(email = %input.email, "contact email unusable as reply-to");
            return Err(Rejection::InvalidEmail.into());
        }

        let email = ContactEmail::new(&self.to, input);

        tracing::info!(
            mode = %self.sender.mode(),
            category = %email.category_label,
            "dispatching contact submission"
        );

        self.sender.send(&email).await
    }
}

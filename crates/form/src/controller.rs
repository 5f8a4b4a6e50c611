use std::{sync::Arc, time::Duration};

use serde::Deserialize;
use tokio::{sync::watch, task::AbortHandle};
use tooniq_shared::contact::{ContactSubmission, Field};

use crate::{Reply, SubmitError, SubmitPayload, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct FormOptions {
    pub recipient: String,
    /// Key required by hosted form APIs. The relay ignores it.
    pub access_key: Option<String>,
    pub success_reset: Duration,
    /// `None` keeps the error visible until the next submit.
    pub error_reset: Option<Duration>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            recipient: "contact@tooniq.co.jp".to_owned(),
            access_key: None,
            success_reset: Duration::from_millis(5000),
            error_reset: None,
        }
    }
}

#[derive(Deserialize)]
struct ReplyBody {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ReplyBody {
    fn reason(self) -> String {
        self.error
            .or(self.message)
            .unwrap_or_else(|| "no reason given".to_owned())
    }
}

/// Success needs both a 2xx status and `success: true` in the body.
fn classify(reply: Reply) -> Result<(), SubmitError> {
    if !(200..300).contains(&reply.status) {
        let message = serde_json::from_str::<ReplyBody>(&reply.body)
            .map(ReplyBody::reason)
            .unwrap_or(reply.body);

        return Err(SubmitError::Status {
            status: reply.status,
            message,
        });
    }

    let body: ReplyBody = serde_json::from_str(&reply.body)?;
    if !body.success {
        return Err(SubmitError::Refused(body.reason()));
    }

    Ok(())
}

/// Owns one contact draft and drives `Idle → Submitting → Success | Error`.
///
/// `submit` borrows the form mutably for the whole request, which is what keeps
/// a second submission from starting while one is in flight. Status changes are
/// published on a watch channel for whoever renders them.
pub struct ContactForm<T: Transport> {
    draft: ContactSubmission,
    transport: T,
    options: FormOptions,
    status: Arc<watch::Sender<SubmitStatus>>,
    reset_timer: Option<AbortHandle>,
}

impl<T: Transport> ContactForm<T> {
    pub fn new(transport: T, options: FormOptions) -> Self {
        let (status, _) = watch::channel(SubmitStatus::Idle);

        Self {
            draft: ContactSubmission::default(),
            transport,
            options,
            status: Arc::new(status),
            reset_timer: None,
        }
    }

    pub fn draft(&self) -> &ContactSubmission {
        &self.draft
    }

    pub fn status(&self) -> SubmitStatus {
        *self.status.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmitStatus> {
        self.status.subscribe()
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Mirrors the disabled state of the submit button.
    pub fn can_submit(&self) -> bool {
        self.status() != SubmitStatus::Submitting && self.draft.check().is_ok()
    }

    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        self.draft.check()?;

        self.cancel_reset();
        self.status.send_replace(SubmitStatus::Submitting);

        let payload = SubmitPayload::new(&self.draft, &self.options);
        let outcome = match self.transport.post(&payload).await {
            Ok(reply) => classify(reply),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(()) => {
                self.draft = ContactSubmission::default();
                self.settle(SubmitStatus::Success, Some(self.options.success_reset));

                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "contact submission failed");
                self.settle(SubmitStatus::Error, self.options.error_reset);

                Err(err)
            }
        }
    }

    /// Cancels any pending status reset. Called on drop as well.
    pub fn teardown(&mut self) {
        self.cancel_reset();
    }

    fn settle(&mut self, status: SubmitStatus, reset_after: Option<Duration>) {
        self.status.send_replace(status);

        let Some(delay) = reset_after else {
            return;
        };

        let sender = self.status.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            sender.send_if_modified(|current| {
                if *current != status {
                    return false;
                }

                *current = SubmitStatus::Idle;
                true
            });
        });

        self.reset_timer = Some(timer.abort_handle());
    }

    fn cancel_reset(&mut self) {
        if let Some(timer) = self.reset_timer.take() {
            timer.abort();
        }
    }
}

impl<T: Transport> Drop for ContactForm<T> {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}

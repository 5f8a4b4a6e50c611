use std::sync::Arc;

use tooniq_notification::{MailSender, SendMode};

mod submit_form;

/// Same-origin endpoint logic between the browser and the mail provider.
///
/// The relay keeps nothing between requests: each submission is validated,
/// turned into one email and handed to the sender exactly once.
#[derive(Clone)]
pub struct Relay {
    sender: Arc<dyn MailSender>,
    to: String,
}

impl Relay {
    pub fn new(sender: Arc<dyn MailSender>, to: impl Into<String>) -> Self {
        Self {
            sender,
            to: to.into(),
        }
    }

    pub fn mode(&self) -> SendMode {
        self.sender.mode()
    }

    pub fn recipient(&self) -> &str {
        &self.to
    }
}

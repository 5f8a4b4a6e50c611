use anyhow::Context;
use askama::Template;
use lettre::message::Mailbox;
use tooniq_shared::contact::ContactSubmission;

use crate::template::{ContactHtmlTemplate, ContactPlainTemplate};

pub const SUBJECT_PREFIX: &str = "【お問い合わせ】";

/// Whether `address` can be written into a Reply-To header. Stricter than
/// [`tooniq_shared::contact::EMAIL_FORMAT`], which lets through local parts
/// such as `a"b` or `a,b`.
pub fn accepts_reply_to(address: &str) -> bool {
    address.parse::<Mailbox>().is_ok()
}

/// A contact submission addressed to the site's inbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub category_label: String,
    pub submission: ContactSubmission,
}

impl ContactEmail {
    pub fn new(to: impl Into<String>, submission: ContactSubmission) -> Self {
        let category_label = submission.category_label().to_owned();

        Self {
            to: to.into(),
            reply_to: submission.email.to_owned(),
            subject: format!("{SUBJECT_PREFIX}{category_label}"),
            category_label,
            submission,
        }
    }

    pub fn html(&self) -> anyhow::Result<String> {
        ContactHtmlTemplate { email: self }
            .render()
            .context("Failed to render HTML contact email")
    }

    pub fn plain(&self) -> anyhow::Result<String> {
        ContactPlainTemplate { email: self }
            .render()
            .context("Failed to render plain text contact email")
    }
}

use serde::Serialize;
use tooniq_shared::contact::ContactSubmission;

use crate::FormOptions;

/// Snapshot of the draft as it goes over the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    pub to: String,
    pub subject: String,
    #[serde(flatten)]
    pub submission: ContactSubmission,
    pub category_label: String,
}

impl SubmitPayload {
    pub fn new(draft: &ContactSubmission, options: &FormOptions) -> Self {
        let category_label = draft.category_label().to_owned();

        Self {
            access_key: options.access_key.clone(),
            to: options.recipient.clone(),
            subject: format!("お問い合わせ: {category_label}"),
            submission: draft.clone(),
            category_label,
        }
    }
}

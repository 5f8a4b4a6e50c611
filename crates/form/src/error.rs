use tooniq_shared::contact::Rejection;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Draft failed validation, nothing was sent.
    #[error("{0}")]
    Invalid(#[from] Rejection),

    #[error("endpoint answered {status}: {message}")]
    Status { status: u16, message: String },

    #[error("endpoint refused the submission: {0}")]
    Refused(String),

    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value.to_string())
    }
}

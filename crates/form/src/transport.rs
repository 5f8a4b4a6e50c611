use std::time::Duration;

use crate::{SubmitError, SubmitPayload};

/// Raw answer from the endpoint. Classification is left to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, payload: &SubmitPayload) -> Result<Reply, SubmitError>;
}

/// POSTs the payload as JSON, either to the relay or to a hosted form API.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// `timeout: None` leaves the request unbounded, like a browser fetch.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, SubmitError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn post(&self, payload: &SubmitPayload) -> Result<Reply, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(Reply { status, body })
    }
}

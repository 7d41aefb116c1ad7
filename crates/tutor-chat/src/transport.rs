//! Transport to the completion endpoint.
//!
//! The session only ever sees [`CompletionTransport`]; the HTTP
//! implementation mirrors the endpoint's JSON contract and nothing else.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One prior turn, text only — the endpoint infers roles positionally.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub message: String,
}

/// The completion endpoint's response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionReply {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// HTML rendering of `message`; empty when unsuccessful.
    #[serde(default)]
    pub formattedmessage: String,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("endpoint returned HTTP {0}")]
    Status(u16),
}

#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn get_completion(
        &self,
        message: &str,
        history: &[HistoryEntry],
    ) -> Result<CompletionReply, TransportError>;
}

/// HTTP transport posting to the service's completion endpoint.
pub struct HttpCompletionTransport {
    http: reqwest::Client,
    endpoint: String,
    user_id: Option<i64>,
}

impl HttpCompletionTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), endpoint: endpoint.into(), user_id: None }
    }

    /// Attach the host-application user id to every request.
    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

#[async_trait]
impl CompletionTransport for HttpCompletionTransport {
    async fn get_completion(
        &self,
        message: &str,
        history: &[HistoryEntry],
    ) -> Result<CompletionReply, TransportError> {
        #[derive(Serialize)]
        struct Body<'a> {
            message: &'a str,
            history: &'a [HistoryEntry],
            #[serde(skip_serializing_if = "Option::is_none")]
            userid: Option<i64>,
        }

        let response = self
            .http
            .post(&self.endpoint)
            .json(&Body { message, history, userid: self.user_id })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

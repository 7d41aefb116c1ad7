//! Authenticated HTTP wrapper over the completion provider's API.
//!
//! One [`ProviderClient`] covers both provider surfaces the assistant uses:
//! the stateless `/chat/completions` call and the stateful
//! threads/messages/runs family. The client is stateless between calls and
//! cheap to clone (`reqwest::Client` is an `Arc` internally).

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{ClientError, Result};
use crate::types::{
    Assistant, AssistantList, ChatCompletionRequest, ChatCompletionResponse, Run, ThreadMessage,
    ThreadMessageList, ThreadObject,
};

const API_BASE_URL: &str = "https://api.openai.com/v1";

/// Fixed API-version header attached to every request.
const BETA_HEADER: &str = "OpenAI-Beta";
const BETA_VERSION: &str = "assistants=v2";

#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProviderClient {
    /// Create a client against the production API endpoint.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Point the client at a different endpoint. Tests use this to talk to
    /// a local mock server.
    pub fn with_base_url(api_key: &str, base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|_| ClientError::InvalidApiKey)?,
        );
        headers.insert(BETA_HEADER, HeaderValue::from_static(BETA_VERSION));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self { http, base_url: base_url.into() })
    }

    /// Execute one request against the provider.
    ///
    /// Only GET and POST are part of the surface; anything else is rejected
    /// before a connection is opened. Non-2xx responses become
    /// [`ClientError::Provider`] with the message pulled out of the
    /// provider's error envelope when present.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value> {
        if method != Method::GET && method != Method::POST {
            return Err(ClientError::UnsupportedMethod(method.to_string()));
        }

        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, %url, "provider request");

        let response = request.send().await.map_err(|e| {
            error!(%url, error = %e, "provider request failed (transport)");
            ClientError::Transport(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(ClientError::Transport)?;

        if !status.is_success() {
            return Err(provider_error(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|e| {
            error!(%url, error = %e, "provider returned a non-JSON body");
            ClientError::Decode(format!("invalid JSON in provider response: {e}"))
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let value = self.request(Method::GET, path, query, None).await?;
        decode(value)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T> {
        let value = self.request(Method::POST, path, &[], Some(&body)).await?;
        decode(value)
    }

    // ── Assistants ───────────────────────────────────────────────────────

    pub async fn list_assistants(&self, order: &str, limit: u32) -> Result<AssistantList> {
        self.get(
            "/assistants",
            &[("order", order.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    pub async fn get_assistant(&self, assistant_id: &str) -> Result<Assistant> {
        self.get(&format!("/assistants/{assistant_id}"), &[]).await
    }

    // ── Chat completions ─────────────────────────────────────────────────

    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let body = serde_json::to_value(request)
            .map_err(|e| ClientError::Decode(format!("failed to encode request: {e}")))?;
        self.post("/chat/completions", body).await
    }

    // ── Threads & runs ───────────────────────────────────────────────────

    pub async fn create_thread(&self) -> Result<ThreadObject> {
        self.post("/threads", serde_json::json!({})).await
    }

    /// Append `text` as a user message to the thread.
    pub async fn add_message(&self, thread_id: &str, text: &str) -> Result<ThreadMessage> {
        self.post(
            &format!("/threads/{thread_id}/messages"),
            serde_json::json!({ "role": "user", "content": text }),
        )
        .await
    }

    pub async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run> {
        self.post(
            &format!("/threads/{thread_id}/runs"),
            serde_json::json!({ "assistant_id": assistant_id }),
        )
        .await
    }

    pub async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        self.get(&format!("/threads/{thread_id}/runs/{run_id}"), &[]).await
    }

    /// Newest messages first, at most `limit` of them.
    pub async fn latest_messages(&self, thread_id: &str, limit: u32) -> Result<ThreadMessageList> {
        self.get(
            &format!("/threads/{thread_id}/messages"),
            &[("order", "desc".to_string()), ("limit", limit.to_string())],
        )
        .await
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| ClientError::Decode(format!("unexpected provider response shape: {e}")))
}

/// Build a [`ClientError::Provider`] from a non-2xx response body.
///
/// The provider wraps failures in `{"error": {"message": ...}}`; anything
/// that does not match that envelope falls back to a generic message.
fn provider_error(status: u16, body: &str) -> ClientError {
    #[derive(Deserialize)]
    struct Envelope {
        error: EnvelopeBody,
    }
    #[derive(Deserialize)]
    struct EnvelopeBody {
        message: String,
    }

    let message = serde_json::from_str::<Envelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| "unknown provider error".to_string());

    error!(status, %message, "provider returned an error response");
    ClientError::Provider { status, message }
}

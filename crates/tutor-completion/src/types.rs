use serde::{Deserialize, Serialize};

/// One prior turn as supplied by the conversation client.
///
/// Entries carry text only — no role. When a strategy needs roles it infers
/// them positionally (even index = user, odd = assistant), so callers must
/// keep the sequence ordered and alternating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub message: String,
}

impl HistoryEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// A completion request as it arrives at the gateway.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub message: String,
    pub history: Vec<HistoryEntry>,
    /// Host-application user id; keys the per-user provider thread.
    pub user_id: i64,
}

/// A successful strategy outcome. The assistant-run strategy may produce an
/// empty reply (a completed run with no text part); the direct strategy
/// never does.
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
}

/// The single contract both strategies satisfy, normalized for the
/// request/response endpoint: failures are values, never exceptions.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionResult {
    pub success: bool,
    pub message: String,
    /// Stable error-kind tag, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl CompletionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into(), error: None }
    }

    pub fn failed(message: impl Into<String>, kind: &'static str) -> Self {
        Self { success: false, message: message.into(), error: Some(kind) }
    }
}

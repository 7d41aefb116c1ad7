//! The completion endpoint consumed by the conversation client.
//!
//! Failures are values: the endpoint always answers HTTP 200 with
//! `success: false` in the envelope, because the client has no
//! status-code-to-message mapping of its own.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tutor_completion::{CompletionRequest, HistoryEntry};

use crate::render::render_markdown;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompletionParams {
    pub message: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// Host-application user id; keys the per-user provider thread in
    /// assistant mode. Session handling is the host's concern.
    #[serde(default)]
    pub userid: i64,
}

#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub success: bool,
    pub message: String,
    /// HTML rendering of `message`; empty when unsuccessful.
    pub formattedmessage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

pub async fn get_completion(
    State(state): State<Arc<AppState>>,
    Json(params): Json<CompletionParams>,
) -> Json<CompletionResponse> {
    if !state.config.chat.enabled {
        return Json(CompletionResponse {
            success: false,
            message: state.config.chat.disabled_message.clone(),
            formattedmessage: String::new(),
            error: Some("disabled"),
        });
    }

    debug!(userid = params.userid, history_len = params.history.len(), "completion request");

    let request = CompletionRequest {
        message: params.message,
        history: params.history,
        user_id: params.userid,
    };
    let result = state.gateway.complete(&request).await;

    let formattedmessage = if result.success {
        render_markdown(&result.message)
    } else {
        String::new()
    };

    Json(CompletionResponse {
        success: result.success,
        message: result.message,
        formattedmessage,
        error: result.error,
    })
}

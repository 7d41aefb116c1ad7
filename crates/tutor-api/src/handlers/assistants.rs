//! Operator-facing assistant lookups, used when configuring assistant mode.
//!
//! Like the completion endpoint these always answer 200 with an envelope;
//! unlike it they surface the provider's error message, since the audience
//! is an operator, not an end user.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AssistantSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub model: String,
    pub created_at: i64,
}

#[derive(Debug, Serialize)]
pub struct ListAssistantsResponse {
    pub success: bool,
    pub assistants: Vec<AssistantSummary>,
    pub error: String,
}

pub async fn list_assistants(State(state): State<Arc<AppState>>) -> Json<ListAssistantsResponse> {
    match state.provider.list_assistants("desc", 100).await {
        Ok(list) => {
            let assistants = list
                .data
                .into_iter()
                .map(|assistant| AssistantSummary {
                    id: assistant.id,
                    name: assistant.name.unwrap_or_else(|| "Unnamed assistant".to_string()),
                    description: assistant.description.unwrap_or_default(),
                    model: assistant.model.unwrap_or_default(),
                    created_at: assistant.created_at,
                })
                .collect();
            Json(ListAssistantsResponse { success: true, assistants, error: String::new() })
        }
        Err(e) => {
            warn!(error = %e, "failed to list assistants");
            Json(ListAssistantsResponse {
                success: false,
                assistants: Vec::new(),
                error: e.to_string(),
            })
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssistantInfoResponse {
    pub success: bool,
    pub name: String,
    pub description: String,
    pub model: String,
    pub instructions: String,
    /// Number of tools attached to the assistant.
    pub tools: usize,
    pub error: String,
}

pub async fn get_assistant_info(
    State(state): State<Arc<AppState>>,
    Path(assistant_id): Path<String>,
) -> Json<AssistantInfoResponse> {
    match state.provider.get_assistant(&assistant_id).await {
        Ok(assistant) => Json(AssistantInfoResponse {
            success: true,
            name: assistant.name.unwrap_or_default(),
            description: assistant.description.unwrap_or_default(),
            model: assistant.model.unwrap_or_default(),
            instructions: assistant.instructions.unwrap_or_default(),
            tools: assistant.tools.len(),
            error: String::new(),
        }),
        Err(e) => {
            warn!(%assistant_id, error = %e, "failed to fetch assistant info");
            Json(AssistantInfoResponse {
                success: false,
                name: String::new(),
                description: String::new(),
                model: String::new(),
                instructions: String::new(),
                tools: 0,
                error: e.to_string(),
            })
        }
    }
}

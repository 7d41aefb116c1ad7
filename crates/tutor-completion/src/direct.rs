//! Stateless completion strategy over `/chat/completions`.
//!
//! Every invocation ships the full context: the configured system prompt,
//! the caller-supplied history with roles inferred positionally, and the
//! new user message.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use tutor_llm::{ChatApi, ChatCompletionRequest, ChatMessage, ClientError};

use crate::config::ModelParams;
use crate::error::CompletionError;
use crate::gateway::CompletionStrategy;
use crate::types::{HistoryEntry, Reply};

pub struct DirectCompletion {
    client: Arc<dyn ChatApi>,
    params: ModelParams,
    system_prompt: String,
}

impl DirectCompletion {
    pub fn new(client: Arc<dyn ChatApi>, params: ModelParams, system_prompt: String) -> Self {
        Self { client, params, system_prompt }
    }

    /// `[system] + history + [new user message]`.
    ///
    /// History entries carry no role; even indices are the user's turns,
    /// odd indices the assistant's. Callers must preserve that alternation
    /// or role assignment comes out wrong.
    fn build_messages(&self, message: &str, history: &[HistoryEntry]) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(&self.system_prompt));
        for (index, entry) in history.iter().enumerate() {
            if index % 2 == 0 {
                messages.push(ChatMessage::user(&entry.message));
            } else {
                messages.push(ChatMessage::assistant(&entry.message));
            }
        }
        messages.push(ChatMessage::user(message));
        messages
    }
}

#[async_trait]
impl CompletionStrategy for DirectCompletion {
    async fn complete(
        &self,
        _user_id: i64,
        message: &str,
        history: &[HistoryEntry],
    ) -> Result<Reply, CompletionError> {
        let request = ChatCompletionRequest {
            model: self.params.model.clone(),
            messages: self.build_messages(message, history),
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
            top_p: self.params.top_p,
            frequency_penalty: self.params.frequency_penalty,
            presence_penalty: self.params.presence_penalty,
        };

        debug!(model = %request.model, messages = request.messages.len(), "requesting chat completion");

        let response = self.client.chat_completion(&request).await?;
        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                CompletionError::Client(ClientError::Decode(
                    "empty or missing content in completion response".into(),
                ))
            })?;

        Ok(Reply { text })
    }
}

//! Explicit configuration value objects for the gateway.
//!
//! Components receive these in constructors; nothing in this crate reads
//! ambient process state.

use serde::Deserialize;

/// Which strategy serves completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionMode {
    /// Stateless: one `/chat/completions` call carrying the full history.
    Direct,
    /// Stateful: a durable provider thread per user, driven by runs.
    Assistant,
}

/// Sampling parameters for the direct strategy's provider call.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant for a learning management system. Provide clear, concise, and accurate assistance to users.";

/// Everything the gateway factory needs to wire a strategy.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub mode: CompletionMode,
    /// Provider credential. `None` or empty means unconfigured — the
    /// factory fails with a config error rather than deferring to the
    /// first request.
    pub api_key: Option<String>,
    /// Required in assistant mode, ignored otherwise.
    pub assistant_id: Option<String>,
    pub params: ModelParams,
    pub system_prompt: String,
    /// User-safe text returned whenever a completion fails.
    pub unavailable_message: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            mode: CompletionMode::Direct,
            api_key: None,
            assistant_id: None,
            params: ModelParams::default(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            unavailable_message: crate::gateway::DEFAULT_UNAVAILABLE_MESSAGE.to_string(),
        }
    }
}

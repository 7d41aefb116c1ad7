//! The gateway boundary: one `complete` contract, two interchangeable
//! strategies, and a hard rule that no internal error escapes as a fault.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;
use tutor_llm::ProviderClient;
use tutor_persist::ThreadRepo;

use crate::assistant::AssistantRun;
use crate::clock::{PollPolicy, TokioSleep};
use crate::config::{CompletionMode, GatewayConfig};
use crate::direct::DirectCompletion;
use crate::error::CompletionError;
use crate::threads::ThreadStore;
use crate::types::{CompletionRequest, CompletionResult, HistoryEntry, Reply};

/// Returned to end users whenever a completion fails, regardless of cause.
/// The cause itself only goes to operator logs.
pub const DEFAULT_UNAVAILABLE_MESSAGE: &str =
    "The AI service is unavailable right now. Please try again later.";

/// The capability both strategies implement. Selected by configuration,
/// not by inheritance.
#[async_trait]
pub trait CompletionStrategy: Send + Sync {
    async fn complete(
        &self,
        user_id: i64,
        message: &str,
        history: &[HistoryEntry],
    ) -> Result<Reply, CompletionError>;
}

pub struct CompletionGateway {
    strategy: Box<dyn CompletionStrategy>,
    unavailable_message: String,
}

impl std::fmt::Debug for CompletionGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionGateway")
            .field("unavailable_message", &self.unavailable_message)
            .finish_non_exhaustive()
    }
}

impl CompletionGateway {
    pub fn new(strategy: Box<dyn CompletionStrategy>) -> Self {
        Self { strategy, unavailable_message: DEFAULT_UNAVAILABLE_MESSAGE.to_string() }
    }

    pub fn with_unavailable_message(mut self, message: impl Into<String>) -> Self {
        self.unavailable_message = message.into();
        self
    }

    /// Wire a gateway from configuration.
    ///
    /// Credentials and (in assistant mode) the assistant id are validated
    /// here, so a misconfigured deployment fails at startup instead of on
    /// the first user message.
    pub fn from_config(
        config: &GatewayConfig,
        repo: Arc<dyn ThreadRepo>,
    ) -> Result<Self, CompletionError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| CompletionError::Config("no API credential configured".into()))?;

        let client = Arc::new(
            ProviderClient::new(api_key)
                .map_err(|e| CompletionError::Config(e.to_string()))?,
        );

        let strategy: Box<dyn CompletionStrategy> = match config.mode {
            CompletionMode::Direct => Box::new(DirectCompletion::new(
                client,
                config.params.clone(),
                config.system_prompt.clone(),
            )),
            CompletionMode::Assistant => {
                let assistant_id = config
                    .assistant_id
                    .as_deref()
                    .filter(|id| !id.is_empty())
                    .ok_or_else(|| {
                        CompletionError::Config(
                            "assistant mode requires a configured assistant id".into(),
                        )
                    })?;
                let threads = ThreadStore::new(repo, client.clone());
                Box::new(AssistantRun::new(
                    client,
                    threads,
                    assistant_id.to_string(),
                    PollPolicy::default(),
                    Arc::new(TokioSleep),
                ))
            }
        };

        Ok(Self::new(strategy).with_unavailable_message(config.unavailable_message.clone()))
    }

    /// Run the configured strategy and normalize the outcome.
    ///
    /// This boundary never lets an error escape: the caller is a
    /// synchronous request/response endpoint with no exception-to-message
    /// mapping of its own.
    pub async fn complete(&self, request: &CompletionRequest) -> CompletionResult {
        match self
            .strategy
            .complete(request.user_id, &request.message, &request.history)
            .await
        {
            Ok(reply) => CompletionResult::ok(reply.text),
            Err(e) => {
                error!(kind = e.kind(), error = %e, "completion failed");
                CompletionResult::failed(self.unavailable_message.clone(), e.kind())
            }
        }
    }
}

use std::sync::Arc;

use tutor_completion::CompletionGateway;
use tutor_llm::ProviderClient;

use crate::config::Config;

/// Shared application state, one instance behind an `Arc` for all handlers.
pub struct AppState {
    pub config: Config,
    pub gateway: CompletionGateway,
    pub provider: Arc<ProviderClient>,
}

impl AppState {
    pub fn new(config: Config, gateway: CompletionGateway, provider: Arc<ProviderClient>) -> Self {
        Self { config, gateway, provider }
    }
}

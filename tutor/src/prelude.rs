//! Convenience re-exports for the common path.

pub use tutor_completion::{
    CompletionGateway, CompletionMode, CompletionRequest, CompletionResult, CompletionStrategy,
    GatewayConfig, HistoryEntry, ModelParams, PollPolicy,
};
pub use tutor_llm::{ClientError, ProviderClient};
pub use tutor_persist::{InMemoryThreadRepo, MongoThreadRepo, PersistClient, ThreadRepo};

pub use tutor_chat::{ChatSession, FileTranscriptCache, HttpCompletionTransport};

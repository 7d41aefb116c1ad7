pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::ProviderClient;
pub use error::ClientError;
pub use traits::{AssistantApi, ChatApi};
pub use types::{
    Assistant, AssistantList,
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    Run, RunStatus,
    ThreadMessage, ThreadMessageList, ThreadObject,
};

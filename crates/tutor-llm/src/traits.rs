//! Capability traits over the provider surface.
//!
//! The completion strategies depend on these rather than on
//! [`ProviderClient`] directly, so tests can substitute scripted fakes and
//! future backends only need to cover the slice they use.

use async_trait::async_trait;

use crate::client::ProviderClient;
use crate::error::Result;
use crate::types::{
    ChatCompletionRequest, ChatCompletionResponse, Run, ThreadMessage, ThreadMessageList,
    ThreadObject,
};

/// One-shot chat completion.
#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

/// The thread/message/run slice of the assistants API.
#[async_trait]
pub trait AssistantApi: Send + Sync {
    async fn create_thread(&self) -> Result<ThreadObject>;

    async fn add_message(&self, thread_id: &str, text: &str) -> Result<ThreadMessage>;

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run>;

    async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<Run>;

    async fn latest_messages(&self, thread_id: &str, limit: u32) -> Result<ThreadMessageList>;
}

#[async_trait]
impl ChatApi for ProviderClient {
    async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        ProviderClient::chat_completion(self, request).await
    }
}

#[async_trait]
impl AssistantApi for ProviderClient {
    async fn create_thread(&self) -> Result<ThreadObject> {
        ProviderClient::create_thread(self).await
    }

    async fn add_message(&self, thread_id: &str, text: &str) -> Result<ThreadMessage> {
        ProviderClient::add_message(self, thread_id, text).await
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run> {
        ProviderClient::create_run(self, thread_id, assistant_id).await
    }

    async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        ProviderClient::get_run(self, thread_id, run_id).await
    }

    async fn latest_messages(&self, thread_id: &str, limit: u32) -> Result<ThreadMessageList> {
        ProviderClient::latest_messages(self, thread_id, limit).await
    }
}

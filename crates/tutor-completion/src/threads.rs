use std::sync::Arc;

use tracing::info;
use tutor_llm::AssistantApi;
use tutor_persist::ThreadRepo;

use crate::error::CompletionError;

/// Read-through cache over the durable `user -> provider thread` mapping.
///
/// A mapping is created lazily on the first assistant-run invocation for a
/// user and reused for every one after that; it is never recreated
/// opportunistically.
pub struct ThreadStore {
    repo: Arc<dyn ThreadRepo>,
    client: Arc<dyn AssistantApi>,
}

impl ThreadStore {
    pub fn new(repo: Arc<dyn ThreadRepo>, client: Arc<dyn AssistantApi>) -> Self {
        Self { repo, client }
    }

    /// Return the user's provider thread id, minting one on first use.
    ///
    /// The read-then-create step is not guarded: two concurrent first-time
    /// requests for the same user may both mint a thread, and the later
    /// upsert wins.
    pub async fn get_or_create(&self, user_id: i64) -> Result<String, CompletionError> {
        if let Some(record) = self.repo.find(user_id).await? {
            return Ok(record.provider_thread_id);
        }
        self.create_and_store(user_id).await
    }

    /// Drop the stored mapping and mint a fresh provider thread. Used when
    /// the stored thread turns out to be gone upstream.
    pub async fn recreate(&self, user_id: i64) -> Result<String, CompletionError> {
        self.repo.remove(user_id).await?;
        self.create_and_store(user_id).await
    }

    async fn create_and_store(&self, user_id: i64) -> Result<String, CompletionError> {
        let thread = self.client.create_thread().await?;
        info!(user_id, thread_id = %thread.id, "created provider thread");
        self.repo.upsert(user_id, &thread.id).await?;
        Ok(thread.id)
    }
}

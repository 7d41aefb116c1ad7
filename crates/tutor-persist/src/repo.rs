use async_trait::async_trait;

use crate::error::Result;
use crate::models::ThreadRecord;

/// Storage operations for the per-user thread mapping.
///
/// Implementations provide database-specific CRUD; the completion layer
/// only ever sees this trait.
#[async_trait]
pub trait ThreadRepo: Send + Sync {
    /// Look up the mapping for a user.
    async fn find(&self, user_id: i64) -> Result<Option<ThreadRecord>>;

    /// Insert or replace the mapping for `user_id`.
    ///
    /// Deliberately last-writer-wins: the read-then-create step above this
    /// is not transactionally guarded, so two concurrent first-time
    /// requests may both create a provider thread — the later write keeps
    /// the row consistent (one record per user, unique index).
    async fn upsert(&self, user_id: i64, provider_thread_id: &str) -> Result<ThreadRecord>;

    /// Drop the mapping. Returns whether a record existed.
    async fn remove(&self, user_id: i64) -> Result<bool>;
}

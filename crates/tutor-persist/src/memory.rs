//! In-memory [`ThreadRepo`] for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ThreadRecord;
use crate::repo::ThreadRepo;

#[derive(Default)]
pub struct InMemoryThreadRepo {
    records: Mutex<HashMap<i64, ThreadRecord>>,
}

impl InMemoryThreadRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ThreadRepo for InMemoryThreadRepo {
    async fn find(&self, user_id: i64) -> Result<Option<ThreadRecord>> {
        Ok(self.records.lock().unwrap().get(&user_id).cloned())
    }

    async fn upsert(&self, user_id: i64, provider_thread_id: &str) -> Result<ThreadRecord> {
        let record = ThreadRecord::new(user_id, provider_thread_id);
        self.records.lock().unwrap().insert(user_id, record.clone());
        Ok(record)
    }

    async fn remove(&self, user_id: i64) -> Result<bool> {
        Ok(self.records.lock().unwrap().remove(&user_id).is_some())
    }
}

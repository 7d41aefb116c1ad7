use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};
use tracing::debug;

use crate::error::Result;
use crate::models::ThreadRecord;
use crate::repo::ThreadRepo;

const COLLECTION: &str = "threads";

#[derive(Clone)]
pub struct MongoThreadRepo {
    collection: Collection<ThreadRecord>,
}

impl MongoThreadRepo {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection(COLLECTION);
        Self { collection }
    }

    /// Create the unique index on `user_id`. Safe to call on every startup;
    /// index creation is idempotent.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }
}

#[async_trait]
impl ThreadRepo for MongoThreadRepo {
    async fn find(&self, user_id: i64) -> Result<Option<ThreadRecord>> {
        let filter = doc! { "user_id": user_id };
        Ok(self.collection.find_one(filter).await?)
    }

    async fn upsert(&self, user_id: i64, provider_thread_id: &str) -> Result<ThreadRecord> {
        let record = ThreadRecord::new(user_id, provider_thread_id);
        self.collection
            .replace_one(doc! { "user_id": user_id }, &record)
            .upsert(true)
            .await?;
        debug!(user_id, provider_thread_id, "stored thread mapping");
        Ok(record)
    }

    async fn remove(&self, user_id: i64) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "user_id": user_id }).await?;
        Ok(result.deleted_count > 0)
    }
}

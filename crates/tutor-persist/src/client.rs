use mongodb::Client;

use crate::error::{PersistError, Result};
use crate::repositories::MongoThreadRepo;

pub struct PersistClient {
    thread_repo: MongoThreadRepo,
}

impl PersistClient {
    /// Connect and prepare the thread collection (unique index included).
    pub async fn connect(mongodb_uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        let thread_repo = MongoThreadRepo::new(&client, db_name);
        thread_repo.ensure_indexes().await?;

        Ok(Self { thread_repo })
    }

    pub fn threads(&self) -> &MongoThreadRepo {
        &self.thread_repo
    }
}

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One durable record per user, mapping to the provider-side thread that
/// holds that user's conversation. At most one live thread per user; the
/// collection carries a unique index on `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: i64,
    pub provider_thread_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ThreadRecord {
    /// A freshly-minted mapping, not yet assigned a database id.
    pub fn new(user_id: i64, provider_thread_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            user_id,
            provider_thread_id: provider_thread_id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

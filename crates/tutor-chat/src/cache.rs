//! Persistent transcript cache.
//!
//! The transcript is stored as one JSON blob under a fixed storage key,
//! stamped with its capture time. A blob older than 24 hours is discarded
//! wholesale at load time — there is no partial expiry.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::types::ChatMessage;

/// Fixed storage key; the file cache derives its file name from this.
pub const STORAGE_KEY: &str = "tutor-chat-transcript";

/// Maximum transcript age before it is considered stale.
pub const TRANSCRIPT_TTL_HOURS: i64 = 24;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The persisted blob: the messages plus the moment they were captured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredTranscript {
    pub captured_at: DateTime<Utc>,
    pub messages: Vec<ChatMessage>,
}

impl StoredTranscript {
    pub fn capture(messages: Vec<ChatMessage>) -> Self {
        Self { captured_at: Utc::now(), messages }
    }

    /// Whether the blob is still usable at `now`.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.captured_at) <= Duration::hours(TRANSCRIPT_TTL_HOURS)
    }
}

pub trait TranscriptCache: Send + Sync {
    fn store(&self, transcript: &StoredTranscript) -> Result<(), CacheError>;
    fn load(&self) -> Result<Option<StoredTranscript>, CacheError>;
    fn clear(&self) -> Result<(), CacheError>;
}

impl<T: TranscriptCache + ?Sized> TranscriptCache for std::sync::Arc<T> {
    fn store(&self, transcript: &StoredTranscript) -> Result<(), CacheError> {
        (**self).store(transcript)
    }

    fn load(&self) -> Result<Option<StoredTranscript>, CacheError> {
        (**self).load()
    }

    fn clear(&self) -> Result<(), CacheError> {
        (**self).clear()
    }
}

/// JSON-file cache, one file per storage key in the given directory.
pub struct FileTranscriptCache {
    path: PathBuf,
}

impl FileTranscriptCache {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { path: dir.as_ref().join(format!("{STORAGE_KEY}.json")) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TranscriptCache for FileTranscriptCache {
    fn store(&self, transcript: &StoredTranscript) -> Result<(), CacheError> {
        let data = serde_json::to_string_pretty(transcript)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredTranscript>, CacheError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&data) {
            Ok(transcript) => Ok(Some(transcript)),
            Err(e) => {
                // A malformed blob is treated as absent, not fatal — the
                // session simply starts empty.
                warn!(path = %self.path.display(), error = %e, "discarding malformed transcript cache");
                Ok(None)
            }
        }
    }

    fn clear(&self) -> Result<(), CacheError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory cache for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryTranscriptCache {
    slot: Mutex<Option<StoredTranscript>>,
}

impl MemoryTranscriptCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TranscriptCache for MemoryTranscriptCache {
    fn store(&self, transcript: &StoredTranscript) -> Result<(), CacheError> {
        *self.slot.lock().unwrap() = Some(transcript.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredTranscript>, CacheError> {
        Ok(self.slot.lock().unwrap().clone())
    }

    fn clear(&self) -> Result<(), CacheError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

pub mod cache;
pub mod session;
pub mod transport;
pub mod types;

pub use cache::{CacheError, FileTranscriptCache, MemoryTranscriptCache, StoredTranscript, TranscriptCache};
pub use session::{ChatSession, RenderedReply, SendError};
pub use transport::{CompletionReply, CompletionTransport, HistoryEntry, HttpCompletionTransport, TransportError};
pub use types::{ChatMessage, Sender};

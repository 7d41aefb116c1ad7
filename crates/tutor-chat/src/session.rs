//! Conversation session state.
//!
//! Owns exactly what the widget owns: the open/closed flag, the
//! input-disabled flag while a request is outstanding, and the transcript.
//! Sends are optimistic — the user's message lands in the transcript
//! before the backend answers — and strictly serialized: at most one
//! in-flight request per session, re-entrancy rejected.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::warn;

use crate::cache::{StoredTranscript, TranscriptCache};
use crate::transport::{CompletionTransport, HistoryEntry};
use crate::types::{ChatMessage, Sender};

/// Shown when the endpoint cannot be reached at all, or answers without a
/// usable message. Configurable per session.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// What the widget should render for one reply.
#[derive(Debug, Clone)]
pub struct RenderedReply {
    pub text: String,
    /// Sanitized HTML body, present when the backend supplied one. Render
    /// this instead of `text` when set; fall back to plain text otherwise.
    pub html: Option<String>,
    /// Error bubbles are displayed but never recorded in the transcript.
    pub is_error: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SendError {
    /// A request is already outstanding; input stays disabled until it
    /// resolves.
    #[error("a request is already in flight")]
    Busy,

    #[error("message is empty")]
    Empty,
}

pub struct ChatSession {
    transport: Arc<dyn CompletionTransport>,
    cache: Box<dyn TranscriptCache>,
    transcript: Vec<ChatMessage>,
    open: bool,
    sending: bool,
    fallback_error: String,
}

impl ChatSession {
    pub fn new(transport: Arc<dyn CompletionTransport>, cache: Box<dyn TranscriptCache>) -> Self {
        Self {
            transport,
            cache,
            transcript: Vec::new(),
            open: false,
            sending: false,
            fallback_error: FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn with_fallback_error(mut self, message: impl Into<String>) -> Self {
        self.fallback_error = message.into();
        self
    }

    // ── Visibility ───────────────────────────────────────────────────────

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while a request is outstanding — the widget disables input.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    // ── Transcript persistence ───────────────────────────────────────────

    /// Replay the persisted transcript, if it is still fresh. A stale blob
    /// is discarded wholesale and the session starts empty.
    pub fn restore(&mut self) {
        match self.cache.load() {
            Ok(Some(stored)) if stored.is_fresh(Utc::now()) => {
                self.transcript = stored.messages;
            }
            Ok(Some(_)) => {
                if let Err(e) = self.cache.clear() {
                    warn!(error = %e, "failed to drop stale transcript");
                }
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "failed to load persisted transcript"),
        }
    }

    /// Wipe the persisted transcript and reset the session to its initial
    /// (greeting) state.
    pub fn clear(&mut self) {
        if let Err(e) = self.cache.clear() {
            warn!(error = %e, "failed to clear persisted transcript");
        }
        self.transcript.clear();
    }

    // ── Sending ──────────────────────────────────────────────────────────

    /// Send one message and return what the widget should render.
    ///
    /// The history payload is snapshotted before the optimistic append, so
    /// it holds every prior turn but not the message being sent. Error
    /// bubbles are returned for display but never enter the transcript.
    pub async fn send(&mut self, text: &str) -> Result<RenderedReply, SendError> {
        if self.sending {
            return Err(SendError::Busy);
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(SendError::Empty);
        }

        let history: Vec<HistoryEntry> = self
            .transcript
            .iter()
            .map(|entry| HistoryEntry { message: entry.text.clone() })
            .collect();

        self.push_message(Sender::User, text);
        self.sending = true;
        let outcome = self.transport.get_completion(text, &history).await;
        self.sending = false;

        let reply = match outcome {
            Ok(reply) if reply.success => {
                // The raw text goes into the transcript; the formatted body
                // is display-only.
                self.push_message(Sender::Assistant, &reply.message);
                let html = Some(reply.formattedmessage).filter(|body| !body.is_empty());
                RenderedReply { text: reply.message, html, is_error: false }
            }
            Ok(reply) => {
                let text = if reply.message.is_empty() {
                    self.fallback_error.clone()
                } else {
                    reply.message
                };
                RenderedReply { text, html: None, is_error: true }
            }
            Err(e) => {
                warn!(error = %e, "completion request failed");
                RenderedReply { text: self.fallback_error.clone(), html: None, is_error: true }
            }
        };

        Ok(reply)
    }

    fn push_message(&mut self, sender: Sender, text: &str) {
        self.transcript.push(ChatMessage::new(sender, text));
        let stored = StoredTranscript::capture(self.transcript.clone());
        if let Err(e) = self.cache.store(&stored) {
            warn!(error = %e, "failed to persist transcript");
        }
    }
}

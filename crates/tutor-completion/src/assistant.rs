//! Stateful completion strategy over the assistants API.
//!
//! The provider-side thread holds the conversation, so the caller-supplied
//! history is accepted but never replayed. Each invocation walks the run
//! lifecycle: resolve thread, append message, start run, poll to a
//! terminal status, fetch the newest reply.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use tutor_llm::{AssistantApi, ClientError, Run, RunStatus, ThreadMessageList};

use crate::clock::{PollPolicy, Sleep};
use crate::error::CompletionError;
use crate::gateway::CompletionStrategy;
use crate::threads::ThreadStore;
use crate::types::{HistoryEntry, Reply};

pub struct AssistantRun {
    client: Arc<dyn AssistantApi>,
    threads: ThreadStore,
    assistant_id: String,
    poll: PollPolicy,
    sleep: Arc<dyn Sleep>,
}

impl AssistantRun {
    pub fn new(
        client: Arc<dyn AssistantApi>,
        threads: ThreadStore,
        assistant_id: String,
        poll: PollPolicy,
        sleep: Arc<dyn Sleep>,
    ) -> Self {
        Self { client, threads, assistant_id, poll, sleep }
    }

    /// Append the user message, recreating the thread once if the stored
    /// mapping points at a thread the provider no longer knows.
    async fn append_message(
        &self,
        user_id: i64,
        thread_id: String,
        text: &str,
    ) -> Result<String, CompletionError> {
        match self.client.add_message(&thread_id, text).await {
            Ok(_) => Ok(thread_id),
            Err(ClientError::Provider { status: 404, .. }) => {
                warn!(user_id, %thread_id, "stored thread is gone upstream, minting a replacement");
                let fresh = self.threads.recreate(user_id).await?;
                self.client.add_message(&fresh, text).await?;
                Ok(fresh)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch run status until it goes terminal or the attempt budget runs
    /// out. Blocks the calling task between checks; there is no
    /// cancellation once polling starts.
    async fn poll_run(&self, thread_id: &str, run_id: &str) -> Result<Run, CompletionError> {
        let mut attempts = 0u32;
        loop {
            let run = self.client.get_run(thread_id, run_id).await?;
            attempts += 1;

            if run.status.is_terminal() {
                debug!(%run_id, status = %run.status, attempts, "run reached a terminal status");
                return Ok(run);
            }
            if attempts >= self.poll.max_attempts {
                return Err(CompletionError::Timeout { attempts });
            }
            self.sleep.sleep(self.poll.interval).await;
        }
    }
}

#[async_trait]
impl CompletionStrategy for AssistantRun {
    async fn complete(
        &self,
        user_id: i64,
        message: &str,
        _history: &[HistoryEntry],
    ) -> Result<Reply, CompletionError> {
        let thread_id = self.threads.get_or_create(user_id).await?;
        let thread_id = self.append_message(user_id, thread_id, message).await?;

        let run = self.client.create_run(&thread_id, &self.assistant_id).await?;
        debug!(%thread_id, run_id = %run.id, "started assistant run");

        let run = self.poll_run(&thread_id, &run.id).await?;
        if run.status != RunStatus::Completed {
            return Err(CompletionError::Run { status: run.status });
        }

        let messages = self.client.latest_messages(&thread_id, 1).await?;
        Ok(Reply { text: extract_reply(&messages) })
    }
}

/// First text part of the newest assistant message. A completed run that
/// produced no text part yields an empty reply, not an error.
fn extract_reply(messages: &ThreadMessageList) -> String {
    messages
        .data
        .iter()
        .filter(|message| message.role == "assistant")
        .find_map(|message| message.first_text())
        .unwrap_or_default()
        .to_string()
}

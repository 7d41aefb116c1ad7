//! Scripted fakes shared by the strategy tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tutor_completion::Sleep;
use tutor_llm::error::Result;
use tutor_llm::{
    AssistantApi, ClientError, Run, RunStatus, ThreadMessage, ThreadMessageList, ThreadObject,
};

/// Assistant API fake driven by a script of run statuses.
///
/// `get_run` pops from `statuses`; once the script is exhausted every
/// further check reports `in_progress`, which is how a run that never
/// finishes is simulated.
pub struct ScriptedAssistant {
    pub statuses: Mutex<VecDeque<RunStatus>>,
    pub thread_ids: Mutex<VecDeque<String>>,
    pub reply_body: Mutex<String>,
    pub fail_next_add_with_404: AtomicBool,
    pub create_thread_calls: AtomicU32,
    pub add_message_calls: AtomicU32,
    pub get_run_calls: AtomicU32,
}

impl ScriptedAssistant {
    pub fn new(statuses: impl IntoIterator<Item = RunStatus>) -> Self {
        Self {
            statuses: Mutex::new(statuses.into_iter().collect()),
            thread_ids: Mutex::new(VecDeque::new()),
            reply_body: Mutex::new(
                r#"{"data":[{"role":"assistant","content":[{"type":"text","text":{"value":"Hi there!"}}]}]}"#
                    .to_string(),
            ),
            fail_next_add_with_404: AtomicBool::new(false),
            create_thread_calls: AtomicU32::new(0),
            add_message_calls: AtomicU32::new(0),
            get_run_calls: AtomicU32::new(0),
        }
    }

    pub fn with_thread_ids(self, ids: impl IntoIterator<Item = &'static str>) -> Self {
        *self.thread_ids.lock().unwrap() = ids.into_iter().map(String::from).collect();
        self
    }

    pub fn with_reply_body(self, body: &str) -> Self {
        *self.reply_body.lock().unwrap() = body.to_string();
        self
    }
}

#[async_trait]
impl AssistantApi for ScriptedAssistant {
    async fn create_thread(&self) -> Result<ThreadObject> {
        self.create_thread_calls.fetch_add(1, Ordering::SeqCst);
        let id = self
            .thread_ids
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "thread_default".to_string());
        Ok(ThreadObject { id })
    }

    async fn add_message(&self, _thread_id: &str, _text: &str) -> Result<ThreadMessage> {
        self.add_message_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_add_with_404.swap(false, Ordering::SeqCst) {
            return Err(ClientError::Provider { status: 404, message: "No thread found".into() });
        }
        Ok(serde_json::from_str(r#"{"role":"user","content":[]}"#).unwrap())
    }

    async fn create_run(&self, _thread_id: &str, _assistant_id: &str) -> Result<Run> {
        Ok(Run { id: "run_1".into(), status: RunStatus::Queued })
    }

    async fn get_run(&self, _thread_id: &str, _run_id: &str) -> Result<Run> {
        self.get_run_calls.fetch_add(1, Ordering::SeqCst);
        let status = self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(RunStatus::InProgress);
        Ok(Run { id: "run_1".into(), status })
    }

    async fn latest_messages(&self, _thread_id: &str, _limit: u32) -> Result<ThreadMessageList> {
        Ok(serde_json::from_str(&self.reply_body.lock().unwrap()).unwrap())
    }
}

/// Records naps instead of taking them, so a 30-attempt poll runs in
/// microseconds.
#[derive(Default)]
pub struct CountingSleep {
    pub naps: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Sleep for CountingSleep {
    async fn sleep(&self, duration: Duration) {
        self.naps.lock().unwrap().push(duration);
    }
}

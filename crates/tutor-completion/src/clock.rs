//! Poll pacing with an injectable sleep, so tests simulate time instead of
//! spending it.

use std::time::Duration;

use async_trait::async_trait;

#[async_trait]
pub trait Sleep: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleep;

#[async_trait]
impl Sleep for TokioSleep {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// How often and how many times the run poller checks before giving up.
///
/// With the defaults a request blocks for at most ~30 seconds of polling;
/// there is no cancellation path once polling starts.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self { interval: Duration::from_secs(1), max_attempts: 30 }
    }
}

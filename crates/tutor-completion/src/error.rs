use thiserror::Error;
use tutor_llm::{ClientError, RunStatus};
use tutor_persist::PersistError;

/// Everything that can go wrong while producing a completion.
///
/// These never cross the gateway boundary:
/// [`CompletionGateway::complete`](crate::CompletionGateway::complete) logs
/// the full error and hands callers a failure result with a generic
/// user-safe message.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Missing or unusable configuration (credential, assistant id).
    #[error("completion backend is not configured: {0}")]
    Config(String),

    /// Provider communication failure, propagated from the HTTP client.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Thread-mapping storage failure.
    #[error(transparent)]
    Store(#[from] PersistError),

    /// The run reached a terminal status other than `completed`.
    #[error("assistant run ended with status {status}")]
    Run { status: RunStatus },

    /// The run never reached a terminal status within the poll budget.
    #[error("assistant run did not finish after {attempts} status checks")]
    Timeout { attempts: u32 },
}

impl CompletionError {
    /// Stable kind tag for the response envelope. The user-facing payload
    /// carries this instead of the diagnostic, which goes to logs only.
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::Config(_) => "config",
            CompletionError::Client(ClientError::Transport(_)) => "transport",
            CompletionError::Client(ClientError::Provider { .. }) => "provider",
            CompletionError::Client(ClientError::Decode(_)) => "decode",
            CompletionError::Client(_) => "client",
            CompletionError::Store(_) => "store",
            CompletionError::Run { .. } => "run",
            CompletionError::Timeout { .. } => "timeout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_display_names_the_attempt_count() {
        let e = CompletionError::Timeout { attempts: 30 };
        assert!(e.to_string().contains("30"));
        assert_eq!(e.kind(), "timeout");
    }

    #[test]
    fn run_failure_display_names_the_status() {
        let e = CompletionError::Run { status: RunStatus::Expired };
        assert!(e.to_string().contains("expired"));
        assert_eq!(e.kind(), "run");
    }

    #[test]
    fn client_errors_map_to_distinct_kinds() {
        let provider = CompletionError::Client(ClientError::Provider {
            status: 401,
            message: "invalid api key".into(),
        });
        assert_eq!(provider.kind(), "provider");

        let decode = CompletionError::Client(ClientError::Decode("bad json".into()));
        assert_eq!(decode.kind(), "decode");
    }
}

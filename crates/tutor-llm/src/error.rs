use thiserror::Error;

/// Errors produced by [`ProviderClient`](crate::ProviderClient) calls.
///
/// None of these are retried at this layer; callers decide whether a
/// failure is worth surfacing or only logging.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The requested HTTP method is not part of the provider surface.
    /// Raised before any network I/O happens.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The API key cannot be used as an HTTP header value.
    #[error("invalid API key: not a valid header value")]
    InvalidApiKey,

    /// Connection-level failure (refused, timed out, TLS, ...).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The provider answered with a non-2xx status. `message` comes from
    /// the provider's structured error body when one is present.
    #[error("provider error (HTTP {status}): {message}")]
    Provider { status: u16, message: String },

    /// A 2xx response whose body could not be decoded.
    #[error("failed to decode provider response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

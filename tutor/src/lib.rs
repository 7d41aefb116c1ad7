//! # Tutor — LMS AI-assistant core
//!
//! Tutor is the completion core behind a floating chat widget for a
//! learning management system: it proxies user messages to an LLM
//! provider and returns formatted replies.
//!
//! ## Architecture
//!
//! Tutor consists of several composable crates:
//!
//! - **tutor-llm**: authenticated provider client (chat completions +
//!   assistants/threads/runs surface)
//! - **tutor-completion**: the completion gateway with its two
//!   interchangeable strategies — stateless direct completion and the
//!   stateful assistant-run lifecycle (thread, message, run, poll)
//! - **tutor-persist**: MongoDB persistence for the per-user provider
//!   thread mapping
//! - **tutor-chat**: headless conversation client — session state, a
//!   single in-flight request, and a 24-hour transcript cache
//!
//! The HTTP service lives in the separate `tutor-api` binary crate.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tutor::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = Arc::new(InMemoryThreadRepo::new());
//!     let config = GatewayConfig {
//!         api_key: std::env::var("OPENAI_API_KEY").ok(),
//!         ..GatewayConfig::default()
//!     };
//!     let gateway = CompletionGateway::from_config(&config, repo)?;
//!
//!     let request = CompletionRequest {
//!         message: "Hello".into(),
//!         history: Vec::new(),
//!         user_id: 1,
//!     };
//!     let result = gateway.complete(&request).await;
//!     println!("{}", result.message);
//!     Ok(())
//! }
//! ```

pub use tutor_chat as chat;
pub use tutor_completion as completion;
pub use tutor_llm as llm;
pub use tutor_persist as persist;

pub mod prelude;

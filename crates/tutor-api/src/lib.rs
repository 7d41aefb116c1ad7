pub mod config;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;

pub use config::Config;
pub use router::build_router;
pub use state::AppState;

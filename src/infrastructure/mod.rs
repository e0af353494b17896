//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - HTTP server setup (server)
//! - Configuration loading (config)
//! - History log adapters (history)
//! - Application state (state)

pub mod config;
pub mod history;
pub mod server;
pub mod state;

pub use config::Config;
pub use history::{DisabledHistoryLog, InMemoryHistoryLog};
pub use state::AppState;

//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no Axum, no Tokio).
//! Only trait definitions and domain error types.

pub mod errors;
pub mod history;

pub use errors::IsbnError;
pub use history::{HistoryEntry, HistoryLog};

//! Request history port
//!
//! Handlers append one entry per processed request. The checksum services
//! never see this trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A single request/response pair, keyed by the time it was recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub request: String,
    pub response: String,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time
    pub fn new(request: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            request: request.into(),
            response: response.into(),
        }
    }
}

/// Append-only log of handled requests
#[async_trait]
pub trait HistoryLog: Send + Sync {
    /// Append an entry
    async fn record(&self, entry: HistoryEntry);

    /// Snapshot of retained entries in insertion order
    async fn entries(&self) -> Vec<HistoryEntry>;

    /// Whether recorded entries are retained at all
    fn is_enabled(&self) -> bool {
        true
    }

    /// Retention cap, `None` when unbounded
    fn limit(&self) -> Option<usize> {
        None
    }
}

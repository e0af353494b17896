//! History log adapters

use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::RwLock;

use crate::domain::{HistoryEntry, HistoryLog};

/// Process-lifetime history kept in memory
#[derive(Default)]
pub struct InMemoryHistoryLog {
    entries: RwLock<VecDeque<HistoryEntry>>,
    limit: Option<usize>,
}

impl InMemoryHistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` entries, dropping the oldest first.
    /// A limit of zero keeps nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            limit: Some(limit),
        }
    }
}

#[async_trait]
impl HistoryLog for InMemoryHistoryLog {
    async fn record(&self, entry: HistoryEntry) {
        if self.limit == Some(0) {
            return;
        }

        let mut entries = self.entries.write().await;
        if let Some(limit) = self.limit {
            if entries.len() >= limit {
                entries.pop_front();
            }
        }
        entries.push_back(entry);
    }

    fn limit(&self) -> Option<usize> {
        self.limit
    }

    async fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.read().await.iter().cloned().collect()
    }
}

/// Discards everything; used when history is switched off
pub struct DisabledHistoryLog;

#[async_trait]
impl HistoryLog for DisabledHistoryLog {
    async fn record(&self, _entry: HistoryEntry) {}

    async fn entries(&self) -> Vec<HistoryEntry> {
        Vec::new()
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_entries_keep_insertion_order() {
        let log = InMemoryHistoryLog::new();
        log.record(HistoryEntry::new("first", "a")).await;
        log.record(HistoryEntry::new("second", "b")).await;

        let entries = log.entries().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].request, "first");
        assert_eq!(entries[1].request, "second");
        assert!(entries[0].recorded_at <= entries[1].recorded_at);
    }

    #[tokio::test]
    async fn test_limit_drops_oldest() {
        let log = InMemoryHistoryLog::with_limit(2);
        for i in 0..5 {
            log.record(HistoryEntry::new(format!("req {}", i), "ok")).await;
        }

        let requests: Vec<String> = log.entries().await.into_iter().map(|e| e.request).collect();
        assert_eq!(requests, vec!["req 3", "req 4"]);
    }

    #[tokio::test]
    async fn test_zero_limit_keeps_nothing() {
        let log = InMemoryHistoryLog::with_limit(0);
        let recorded = tokio::time::timeout(
            std::time::Duration::from_secs(2),
            log.record(HistoryEntry::new("a", "b")),
        )
        .await;

        assert!(recorded.is_ok(), "record with a zero limit must return");
        assert!(log.entries().await.is_empty());
    }

    #[tokio::test]
    async fn test_huge_limit_does_not_preallocate() {
        let log = InMemoryHistoryLog::with_limit(usize::MAX);
        log.record(HistoryEntry::new("req", "resp")).await;

        assert_eq!(log.entries().await.len(), 1);
        assert_eq!(log.limit(), Some(usize::MAX));
    }

    #[tokio::test]
    async fn test_same_instant_entries_are_not_overwritten() {
        let log = Arc::new(InMemoryHistoryLog::new());
        let mut handles = Vec::new();
        for i in 0..50 {
            let log = log.clone();
            handles.push(tokio::spawn(async move {
                log.record(HistoryEntry::new(format!("req {}", i), "ok")).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(log.entries().await.len(), 50);
    }

    #[tokio::test]
    async fn test_disabled_log_stays_empty() {
        let log = DisabledHistoryLog;
        log.record(HistoryEntry::new("req", "resp")).await;
        assert!(log.entries().await.is_empty());
        assert!(!log.is_enabled());
    }
}

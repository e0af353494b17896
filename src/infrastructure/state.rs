//! Application state containing the history log

use std::sync::Arc;

use crate::domain::HistoryLog;
use crate::infrastructure::{Config, DisabledHistoryLog, InMemoryHistoryLog};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Request/response history, injected so handlers never reach a global
    pub history: Arc<dyn HistoryLog>,
}

impl AppState {
    pub fn new(history: Arc<dyn HistoryLog>) -> Self {
        Self { history }
    }

    /// State backed by an unbounded in-memory log
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryHistoryLog::new()))
    }

    /// Pick the history adapter the configuration asks for
    pub fn from_config(config: &Config) -> Self {
        let history: Arc<dyn HistoryLog> = match (config.history_enabled, config.history_limit) {
            (false, _) => Arc::new(DisabledHistoryLog),
            (true, Some(limit)) => Arc::new(InMemoryHistoryLog::with_limit(limit)),
            (true, None) => Arc::new(InMemoryHistoryLog::new()),
        };
        Self::new(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HistoryEntry;
    use crate::infrastructure::config::tests::set_env;
    use serial_test::serial;

    fn state_from_env(vars: &[(&str, &str)]) -> AppState {
        set_env(vars);
        AppState::from_config(&Config::from_env())
    }

    #[tokio::test]
    #[serial]
    async fn test_disabled_history_selected() {
        for value in ["false", "0"] {
            let state = state_from_env(&[("HISTORY_ENABLED", value)]);
            state.history.record(HistoryEntry::new("req", "resp")).await;

            assert!(!state.history.is_enabled());
            assert!(state.history.entries().await.is_empty());
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_unbounded_history_selected() {
        for vars in [
            vec![("HISTORY_ENABLED", "true")],
            vec![("HISTORY_LIMIT", "0")],
            vec![("HISTORY_LIMIT", "garbage")],
        ] {
            let state = state_from_env(&vars);
            assert!(state.history.is_enabled());
            assert_eq!(state.history.limit(), None);
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_limited_history_selected() {
        let state = state_from_env(&[("HISTORY_LIMIT", "2")]);
        for i in 0..3 {
            state
                .history
                .record(HistoryEntry::new(format!("req {}", i), "ok"))
                .await;
        }

        assert_eq!(state.history.limit(), Some(2));
        assert_eq!(state.history.entries().await.len(), 2);
    }

    #[tokio::test]
    #[serial]
    async fn test_huge_limit_starts_up() {
        let state = state_from_env(&[("HISTORY_LIMIT", "18446744073709551615")]);
        state.history.record(HistoryEntry::new("req", "resp")).await;

        assert_eq!(state.history.limit(), Some(usize::MAX));
        assert_eq!(state.history.entries().await.len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_disabled_wins_over_limit() {
        let state = state_from_env(&[("HISTORY_ENABLED", "false"), ("HISTORY_LIMIT", "5")]);
        assert!(!state.history.is_enabled());
    }
}

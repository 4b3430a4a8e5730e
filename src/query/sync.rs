//! Keeps the query string and the store's criteria consistent.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::catalog::{CatalogStore, CriteriaPatch};

use super::codec::{encode_query, parse_query};

// ============================================================================
// QueryHistory
// ============================================================================

/// Address-bar seam: replaces the current history entry's query string.
///
/// `None` resets to the bare path. Implementations must replace, never push
/// a new history entry.
pub trait QueryHistory: Send + Sync {
    fn replace(&self, query: Option<&str>);
}

// ============================================================================
// UrlSync
// ============================================================================

/// Bidirectional adapter between the store's criteria and the query string.
///
/// The query string is a derived view, never a second source of truth: the
/// store is updated first and the history write follows, and the initial
/// restore runs at most once per mount.
pub struct UrlSync {
    history: Arc<dyn QueryHistory>,
    restored: AtomicBool,
}

impl UrlSync {
    pub fn new(history: Arc<dyn QueryHistory>) -> Self {
        Self {
            history,
            restored: AtomicBool::new(false),
        }
    }

    /// Merge criteria parsed from `raw_query` into the store, once.
    ///
    /// Returns whether a restore was applied. Later calls are no-ops (the
    /// one-shot guard is what breaks the store/URL feedback loop), and a
    /// query string without recognized keys leaves the store's defaults
    /// untouched.
    pub async fn restore(&self, store: &CatalogStore, raw_query: &str) -> bool {
        if self.restored.swap(true, Ordering::SeqCst) {
            return false;
        }
        let Some(patch) = parse_query(raw_query) else {
            return false;
        };
        let criteria = store.update_criteria(patch).await;
        debug!(?criteria, "Restored filter criteria from query string");
        true
    }

    /// Apply a user-driven criteria update, then write the result back.
    pub async fn apply(&self, store: &CatalogStore, patch: CriteriaPatch) {
        let criteria = store.update_criteria(patch).await;
        let query = encode_query(&criteria);
        self.history.replace(query.as_deref());
    }

    /// Reset criteria and the query string to their defaults.
    pub async fn clear(&self, store: &CatalogStore) {
        store.clear_criteria().await;
        self.history.replace(None);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Mutex;

    use crate::catalog::{AgentRecord, AgentStatus, PricingModel};

    use super::*;

    #[derive(Default)]
    struct RecordedHistory {
        writes: Mutex<Vec<Option<String>>>,
    }

    impl RecordedHistory {
        fn last(&self) -> Option<Option<String>> {
            self.writes.lock().unwrap().last().cloned()
        }
    }

    impl QueryHistory for RecordedHistory {
        fn replace(&self, query: Option<&str>) {
            self.writes.lock().unwrap().push(query.map(str::to_string));
        }
    }

    fn sample_records() -> Vec<AgentRecord> {
        vec![
            AgentRecord {
                id: "1".to_string(),
                name: "Echo".to_string(),
                description: "voice bot".to_string(),
                status: AgentStatus::Active,
                category: "Support".to_string(),
                pricing_model: PricingModel::FreeTier,
            },
            AgentRecord {
                id: "2".to_string(),
                name: "Forge".to_string(),
                description: "code gen".to_string(),
                status: AgentStatus::Beta,
                category: "Dev".to_string(),
                pricing_model: PricingModel::Subscription,
            },
        ]
    }

    fn sync_pair() -> (UrlSync, Arc<RecordedHistory>) {
        let history = Arc::new(RecordedHistory::default());
        (UrlSync::new(history.clone()), history)
    }

    #[tokio::test]
    async fn restore_applies_bookmarked_query() {
        let store = CatalogStore::new();
        store.seed_once(sample_records()).await;
        let (sync, _history) = sync_pair();

        assert!(
            sync.restore(&store, "status=Active,Beta&pricing=Subscription")
                .await
        );

        let criteria = store.criteria().await;
        assert_eq!(
            criteria.status,
            BTreeSet::from([AgentStatus::Active, AgentStatus::Beta])
        );
        assert_eq!(criteria.pricing, Some(PricingModel::Subscription));

        // Beta + Subscription selects Forge only.
        let filtered = store.filtered().await;
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[tokio::test]
    async fn restore_runs_at_most_once() {
        let store = CatalogStore::new();
        store.seed_once(sample_records()).await;
        let (sync, _history) = sync_pair();

        assert!(!sync.restore(&store, "page=2").await);
        // The mount is consumed even when nothing was applied.
        assert!(!sync.restore(&store, "search=echo").await);
        assert!(store.criteria().await.is_empty());
    }

    #[tokio::test]
    async fn restore_without_recognized_keys_keeps_defaults() {
        let store = CatalogStore::new();
        store.seed_once(sample_records()).await;
        let (sync, history) = sync_pair();

        assert!(!sync.restore(&store, "utm_source=newsletter").await);
        assert!(store.criteria().await.is_empty());
        assert_eq!(history.last(), None);
    }

    #[tokio::test]
    async fn apply_writes_merged_criteria_after_store_update() {
        let store = CatalogStore::new();
        store.seed_once(sample_records()).await;
        let (sync, history) = sync_pair();

        sync.apply(
            &store,
            CriteriaPatch {
                search: Some("echo".to_string()),
                ..Default::default()
            },
        )
        .await;

        let written = history.last().unwrap();
        assert_eq!(written.as_deref(), Some("search=echo"));
        assert_eq!(written.as_deref(), encode_query(&store.criteria().await).as_deref());
    }

    #[tokio::test]
    async fn clear_resets_to_bare_path() {
        let store = CatalogStore::new();
        store.seed_once(sample_records()).await;
        let (sync, history) = sync_pair();

        sync.apply(
            &store,
            CriteriaPatch {
                search: Some("echo".to_string()),
                ..Default::default()
            },
        )
        .await;
        sync.clear(&store).await;

        assert_eq!(history.last(), Some(None));
        assert!(store.criteria().await.is_empty());
        assert_eq!(store.filtered().await, store.records().await);
    }
}

//! The catalog store: records, criteria, and the derived filtered view.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::source::{RecordSource, SourceError};

use super::criteria::{matches, CriteriaPatch, FilterCriteria};
use super::record::{AgentRecord, AgentStatus, PricingModel};

// ============================================================================
// Catalog Store
// ============================================================================

/// Session-scoped container for records, criteria, and their filtered view.
///
/// Cheap to clone; all clones share state. Every mutation recomputes the
/// filtered view before releasing the lock, so callers never observe the
/// criteria and the view out of step.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    inner: Arc<RwLock<CatalogState>>,
}

#[derive(Debug, Default)]
struct CatalogState {
    records: Vec<AgentRecord>,
    criteria: FilterCriteria,
    filtered: Vec<AgentRecord>,
    loading: bool,
    selected: Option<AgentRecord>,
}

impl CatalogState {
    fn refilter(&mut self) {
        self.filtered = self
            .records
            .iter()
            .filter(|r| matches(r, &self.criteria))
            .cloned()
            .collect();
    }
}

/// Distinct filterable values present in the loaded collection, in
/// first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFacets {
    pub statuses: Vec<AgentStatus>,
    pub categories: Vec<String>,
    pub pricing_models: Vec<PricingModel>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the store if it has never held records.
    ///
    /// Returns whether the seed was applied. A second call against a
    /// non-empty store is a no-op; seeding an empty batch is valid and yields
    /// an empty catalog.
    pub async fn seed_once(&self, records: Vec<AgentRecord>) -> bool {
        let mut state = self.inner.write().await;
        if !state.records.is_empty() {
            return false;
        }
        state.records = records;
        state.refilter();
        true
    }

    /// Replace the records from an asynchronous source.
    ///
    /// `loading` is true for the duration of the call. On success the
    /// filtered view mirrors the raw batch (the active criteria are kept but
    /// not re-applied, matching the fetch path's contract); on failure the
    /// records are left unchanged and the error is returned to the caller.
    pub async fn load_from(&self, source: &dyn RecordSource) -> Result<usize, SourceError> {
        {
            let mut state = self.inner.write().await;
            state.loading = true;
        }
        let result = source.load_all().await;
        let mut state = self.inner.write().await;
        state.loading = false;
        let records = result?;
        let count = records.len();
        state.filtered = records.clone();
        state.records = records;
        Ok(count)
    }

    /// Merge a partial update into the criteria and recompute the view.
    ///
    /// Returns the merged criteria so callers can sequence derived writes
    /// (the query-string write-back) strictly after the store update.
    pub async fn update_criteria(&self, patch: CriteriaPatch) -> FilterCriteria {
        let mut state = self.inner.write().await;
        state.criteria.merge(patch);
        state.refilter();
        state.criteria.clone()
    }

    /// Reset the criteria to defaults and restore the unfiltered view.
    pub async fn clear_criteria(&self) {
        let mut state = self.inner.write().await;
        state.criteria = FilterCriteria::default();
        state.filtered = state.records.clone();
    }

    /// Set or clear the detail-view selection. Membership is not validated;
    /// callers are trusted.
    pub async fn select(&self, record: Option<AgentRecord>) {
        let mut state = self.inner.write().await;
        state.selected = record;
    }

    pub async fn selected(&self) -> Option<AgentRecord> {
        self.inner.read().await.selected.clone()
    }

    pub async fn criteria(&self) -> FilterCriteria {
        self.inner.read().await.criteria.clone()
    }

    pub async fn records(&self) -> Vec<AgentRecord> {
        self.inner.read().await.records.clone()
    }

    pub async fn filtered(&self) -> Vec<AgentRecord> {
        self.inner.read().await.filtered.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.loading
    }

    /// Number of records in the full collection.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }

    /// Look up a record by id.
    pub async fn get(&self, id: &str) -> Option<AgentRecord> {
        let state = self.inner.read().await;
        state.records.iter().find(|r| r.id == id).cloned()
    }

    /// Enumerate distinct filter options from the loaded collection.
    pub async fn facets(&self) -> CatalogFacets {
        let state = self.inner.read().await;
        let mut facets = CatalogFacets::default();
        for record in &state.records {
            if !facets.statuses.contains(&record.status) {
                facets.statuses.push(record.status);
            }
            if !facets.categories.contains(&record.category) {
                facets.categories.push(record.category.clone());
            }
            if !facets.pricing_models.contains(&record.pricing_model) {
                facets.pricing_models.push(record.pricing_model);
            }
        }
        facets
    }
}

// ============================================================================
// Tests
// ============================================================================

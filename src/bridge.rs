//! One-time hand-off of server-prepared records into the store.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use crate::catalog::{AgentRecord, CatalogStore};

/// Seeds the store exactly once per process lifetime.
///
/// The guard lives outside the store so a re-mounted consumer cannot re-seed
/// and silently reset user-applied criteria. An empty collection (upstream
/// load failure) is still seeded: downstream must treat empty as a valid
/// display state, not as loading.
#[derive(Debug, Default)]
pub struct InitialDataBridge {
    seeded: AtomicBool,
}

impl InitialDataBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand `records` to the store; later calls are no-ops.
    ///
    /// Returns whether this call performed the seed.
    pub async fn seed(&self, store: &CatalogStore, records: Vec<AgentRecord>) -> bool {
        if self.seeded.swap(true, Ordering::SeqCst) {
            return false;
        }
        let count = records.len();
        store.seed_once(records).await;
        info!(records = count, "Seeded catalog");
        true
    }
}

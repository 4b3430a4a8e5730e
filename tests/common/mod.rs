//! Common test utilities.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tempfile::TempDir;

use agentdex::catalog::{AgentRecord, AgentStatus, CatalogStore, PricingModel};
use agentdex::server::{self, AppState};
use agentdex::source::FileRecordSource;

/// Two-record fixture used across tests.
pub fn sample_records() -> Vec<AgentRecord> {
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

/// Create a test `AppState` whose store is seeded with `seeded` and whose
/// file source holds `on_disk`. Returns the data file path so tests can
/// rewrite it before a reload.
pub async fn test_app_state(
    seeded: Vec<AgentRecord>,
    on_disk: Vec<AgentRecord>,
    api_token: Option<String>,
) -> (AppState, PathBuf) {
    let tmp = TempDir::new().unwrap();
    // Leak the TempDir so it doesn't get cleaned up during the test.
    let tmp = Box::leak(Box::new(tmp));
    let data_file = tmp.path().join("agents.json");
    std::fs::write(&data_file, serde_json::to_vec(&on_disk).unwrap()).unwrap();

    let store = CatalogStore::new();
    store.seed_once(seeded).await;

    let state = AppState {
        store,
        source: Arc::new(FileRecordSource::new(&data_file)),
        api_token,
    };
    (state, data_file)
}

/// Create a test app seeded with the given records, with no API token.
pub async fn test_app_with(records: Vec<AgentRecord>) -> Router {
    let (state, _) = test_app_state(records.clone(), records, None).await;
    server::build_app(state, 30)
}

/// Create a test app with an empty catalog.
pub async fn test_app() -> Router {
    test_app_with(Vec::new()).await
}

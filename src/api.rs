//! Shared API types used by the server handlers.
//!
//! These types define the wire contract; handlers convert catalog records
//! into them rather than exposing internal types directly.

use serde::{Deserialize, Serialize};

use crate::catalog::AgentRecord;

// ============================================================================
// Agent Types
// ============================================================================

/// One record in list and detail responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub category: String,
    pub pricing_model: String,
}

impl From<&AgentRecord> for AgentView {
    fn from(record: &AgentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            status: record.status.to_string(),
            category: record.category.clone(),
            pricing_model: record.pricing_model.to_string(),
        }
    }
}

/// Response for `GET /api/v1/agents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAgentsResponse {
    pub agents: Vec<AgentView>,
    /// Size of the unfiltered collection ("showing N of `total`").
    pub total: usize,
}

/// Response for `GET /api/v1/agents/facets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacetsResponse {
    pub statuses: Vec<String>,
    pub categories: Vec<String>,
    pub pricing_models: Vec<String>,
}

/// Response for `POST /api/admin/v1/reload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub records: usize,
}

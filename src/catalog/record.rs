//! Catalog record types and load-time batch validation.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Enumerations
// ============================================================================

/// Lifecycle status of a cataloged agent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AgentStatus {
    Active,
    Beta,
    Archived,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "Active",
            AgentStatus::Beta => "Beta",
            AgentStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(AgentStatus::Active),
            "Beta" => Ok(AgentStatus::Beta),
            "Archived" => Ok(AgentStatus::Archived),
            other => Err(UnknownValue {
                kind: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// How a cataloged agent is priced.
///
/// Serialized with the human-readable wire strings (`"Per-Use"`, `"Free Tier"`)
/// used by the data file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PricingModel {
    Subscription,
    #[serde(rename = "Per-Use")]
    PerUse,
    #[serde(rename = "Free Tier")]
    FreeTier,
}

impl PricingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingModel::Subscription => "Subscription",
            PricingModel::PerUse => "Per-Use",
            PricingModel::FreeTier => "Free Tier",
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingModel {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Subscription" => Ok(PricingModel::Subscription),
            "Per-Use" => Ok(PricingModel::PerUse),
            "Free Tier" => Ok(PricingModel::FreeTier),
            other => Err(UnknownValue {
                kind: "pricing model",
                value: other.to_string(),
            }),
        }
    }
}

/// A string that is not part of an enumeration's wire vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

// ============================================================================
// AgentRecord
// ============================================================================

/// One catalog entry. Immutable once loaded; identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: AgentStatus,
    pub category: String,
    pub pricing_model: PricingModel,
}

// ============================================================================
// Batch Validation
// ============================================================================

/// A record batch that failed load-time validation.
///
/// Validation is all-or-nothing: one bad record rejects the whole batch
/// rather than silently dropping it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordBatchError {
    #[error("record {index}: missing or empty field '{field}'")]
    EmptyField { index: usize, field: &'static str },

    #[error("record {index}: duplicate id '{id}'")]
    DuplicateId { index: usize, id: String },
}

/// Validate a loaded batch against the catalog invariants.
///
/// Every string field must be non-empty except `description`, and ids must be
/// unique within the batch.
pub fn validate_records(records: &[AgentRecord]) -> Result<(), RecordBatchError> {
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.id.is_empty() {
            return Err(RecordBatchError::EmptyField { index, field: "id" });
        }
        if record.name.is_empty() {
            return Err(RecordBatchError::EmptyField {
                index,
                field: "name",
            });
        }
        if record.category.is_empty() {
            return Err(RecordBatchError::EmptyField {
                index,
                field: "category",
            });
        }
        if !seen.insert(record.id.as_str()) {
            return Err(RecordBatchError::DuplicateId {
                index,
                id: record.id.clone(),
            });
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> AgentRecord {
        AgentRecord {
            id: id.to_string(),
            name: name.to_string(),
            description: "does things".to_string(),
            status: AgentStatus::Active,
            category: "Support".to_string(),
            pricing_model: PricingModel::FreeTier,
        }
    }

    #[test]
    fn record_parses_wire_json() {
        let json = r#"{
            "id": "1",
            "name": "Echo",
            "description": "voice bot",
            "status": "Active",
            "category": "Support",
            "pricingModel": "Free Tier"
        }"#;
        let parsed: AgentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, "1");
        assert_eq!(parsed.status, AgentStatus::Active);
        assert_eq!(parsed.pricing_model, PricingModel::FreeTier);
    }

    #[test]
    fn record_serializes_camel_case_and_wire_strings() {
        let json = serde_json::to_value(record("1", "Echo")).unwrap();
        assert_eq!(json["pricingModel"], "Free Tier");
        assert_eq!(json["status"], "Active");
    }

    #[test]
    fn unknown_status_fails_deserialization() {
        let json = r#"{
            "id": "1",
            "name": "Echo",
            "description": "",
            "status": "Retired",
            "category": "Support",
            "pricingModel": "Subscription"
        }"#;
        assert!(serde_json::from_str::<AgentRecord>(json).is_err());
    }

    #[test]
    fn enum_round_trips_through_strings() {
        for status in [AgentStatus::Active, AgentStatus::Beta, AgentStatus::Archived] {
            assert_eq!(status.as_str().parse::<AgentStatus>().unwrap(), status);
        }
        for pricing in [
            PricingModel::Subscription,
            PricingModel::PerUse,
            PricingModel::FreeTier,
        ] {
            assert_eq!(pricing.as_str().parse::<PricingModel>().unwrap(), pricing);
        }
        assert!("Premium".parse::<PricingModel>().is_err());
    }

    #[test]
    fn validate_accepts_empty_batch() {
        assert!(validate_records(&[]).is_ok());
    }

    #[test]
    fn validate_accepts_empty_description() {
        let mut r = record("1", "Echo");
        r.description = String::new();
        assert!(validate_records(&[r]).is_ok());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let records = vec![record("1", "Echo"), record("2", "")];
        assert_eq!(
            validate_records(&records),
            Err(RecordBatchError::EmptyField {
                index: 1,
                field: "name"
            })
        );
    }

    #[test]
    fn validate_rejects_duplicate_id() {
        let records = vec![record("1", "Echo"), record("1", "Forge")];
        assert_eq!(
            validate_records(&records),
            Err(RecordBatchError::DuplicateId {
                index: 1,
                id: "1".to_string()
            })
        );
    }
}

//! Filter criteria and the predicate evaluator.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::record::{AgentRecord, AgentStatus, PricingModel};

// ============================================================================
// FilterCriteria
// ============================================================================

/// The conjunction of constraints applied to the record collection.
///
/// An empty field places no constraint; the overall match is the AND of every
/// non-empty constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub status: BTreeSet<AgentStatus>,
    pub category: BTreeSet<String>,
    pub pricing: Option<PricingModel>,
}

impl FilterCriteria {
    /// True when every constraint is vacuous.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.status.is_empty()
            && self.category.is_empty()
            && self.pricing.is_none()
    }

    /// Apply a partial update, overwriting each field the patch carries.
    pub fn merge(&mut self, patch: CriteriaPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(pricing) = patch.pricing {
            self.pricing = pricing;
        }
    }

    /// Consuming variant of [`merge`](Self::merge).
    pub fn merged(mut self, patch: CriteriaPatch) -> Self {
        self.merge(patch);
        self
    }
}

/// Partial update to [`FilterCriteria`]; `None` fields are left untouched.
///
/// `pricing` is doubly optional: `Some(None)` clears the constraint while
/// `None` leaves it as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaPatch {
    pub search: Option<String>,
    pub status: Option<BTreeSet<AgentStatus>>,
    pub category: Option<BTreeSet<String>>,
    pub pricing: Option<Option<PricingModel>>,
}

impl CriteriaPatch {
    /// True when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.status.is_none()
            && self.category.is_none()
            && self.pricing.is_none()
    }
}

// ============================================================================
// Predicate Evaluator
// ============================================================================

/// Decide whether a record is included under the given criteria.
///
/// Pure and total over well-formed inputs. Search is a locale-independent
/// lowercase substring match over name and description.
pub fn matches(record: &AgentRecord, criteria: &FilterCriteria) -> bool {
    let matches_search = criteria.search.is_empty() || {
        let needle = criteria.search.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.description.to_lowercase().contains(&needle)
    };

    let matches_status = criteria.status.is_empty() || criteria.status.contains(&record.status);
    let matches_category =
        criteria.category.is_empty() || criteria.category.contains(&record.category);
    let matches_pricing = criteria.pricing.is_none_or(|p| p == record.pricing_model);

    matches_search && matches_status && matches_category && matches_pricing
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn echo() -> AgentRecord {
        AgentRecord {
            id: "1".to_string(),
            name: "Echo".to_string(),
            description: "voice bot".to_string(),
            status: AgentStatus::Active,
            category: "Support".to_string(),
            pricing_model: PricingModel::FreeTier,
        }
    }

    fn forge() -> AgentRecord {
        AgentRecord {
            id: "2".to_string(),
            name: "Forge".to_string(),
            description: "code gen".to_string(),
            status: AgentStatus::Beta,
            category: "Dev".to_string(),
            pricing_model: PricingModel::Subscription,
        }
    }

    #[test]
    fn empty_criteria_match_everything() {
        let criteria = FilterCriteria::default();
        assert!(matches(&echo(), &criteria));
        assert!(matches(&forge(), &criteria));
    }

    #[test]
    fn status_constraint_selects_matching_records() {
        let criteria = FilterCriteria {
            status: BTreeSet::from([AgentStatus::Active]),
            ..Default::default()
        };
        assert!(matches(&echo(), &criteria));
        assert!(!matches(&forge(), &criteria));
    }

    #[test]
    fn search_matches_description() {
        let criteria = FilterCriteria {
            search: "code".to_string(),
            ..Default::default()
        };
        assert!(!matches(&echo(), &criteria));
        assert!(matches(&forge(), &criteria));
    }

    #[test]
    fn search_is_case_insensitive() {
        let criteria = FilterCriteria {
            search: "ECHO".to_string(),
            ..Default::default()
        };
        assert!(matches(&echo(), &criteria));
    }

    #[test]
    fn search_case_folding_handles_non_ascii() {
        let mut record = echo();
        record.name = "Éclair".to_string();
        let criteria = FilterCriteria {
            search: "éclair".to_string(),
            ..Default::default()
        };
        assert!(matches(&record, &criteria));
    }

    #[test]
    fn constraints_combine_with_and() {
        let criteria = FilterCriteria {
            search: "bot".to_string(),
            status: BTreeSet::from([AgentStatus::Beta]),
            ..Default::default()
        };
        // Search matches Echo but the status set excludes it.
        assert!(!matches(&echo(), &criteria));
    }

    #[test]
    fn pricing_constraint_is_exact() {
        let criteria = FilterCriteria {
            pricing: Some(PricingModel::Subscription),
            ..Default::default()
        };
        assert!(!matches(&echo(), &criteria));
        assert!(matches(&forge(), &criteria));
    }

    #[test]
    fn merge_overwrites_only_carried_fields() {
        let mut criteria = FilterCriteria {
            search: "bot".to_string(),
            pricing: Some(PricingModel::FreeTier),
            ..Default::default()
        };
        criteria.merge(CriteriaPatch {
            search: Some("gen".to_string()),
            ..Default::default()
        });
        assert_eq!(criteria.search, "gen");
        assert_eq!(criteria.pricing, Some(PricingModel::FreeTier));
    }

    #[test]
    fn merge_clears_pricing_with_inner_none() {
        let mut criteria = FilterCriteria {
            pricing: Some(PricingModel::FreeTier),
            ..Default::default()
        };
        criteria.merge(CriteriaPatch {
            pricing: Some(None),
            ..Default::default()
        });
        assert_eq!(criteria.pricing, None);
        assert!(criteria.is_empty());
    }
}

//! Query-string codec for filter criteria.
//!
//! Recognized keys: `search` (string), `status` (comma-joined list),
//! `category` (comma-joined list), `pricing` (single value). Unrecognized
//! keys are ignored, malformed values are treated as absent, and individual
//! values are percent-encoded so the list separator never collides with
//! value text.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::str::FromStr;

use urlencoding::{decode, encode};

use crate::catalog::{AgentStatus, CriteriaPatch, FilterCriteria, PricingModel};

pub const PARAM_SEARCH: &str = "search";
pub const PARAM_STATUS: &str = "status";
pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_PRICING: &str = "pricing";

// ============================================================================
// Parsing
// ============================================================================

/// Parse a raw query string into a criteria patch.
///
/// Returns `None` when no recognized key is present, so callers can leave
/// existing criteria untouched instead of overwriting them with defaults.
pub fn parse_query(query: &str) -> Option<CriteriaPatch> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut patch = CriteriaPatch::default();
    let mut recognized = false;

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            PARAM_SEARCH => {
                patch.search = Some(decode_component(value));
                recognized = true;
            }
            PARAM_STATUS => {
                patch.status = Some(parse_list(value, |s| AgentStatus::from_str(s).ok()));
                recognized = true;
            }
            PARAM_CATEGORY => {
                patch.category = Some(parse_list(value, |s| Some(s.to_string())));
                recognized = true;
            }
            PARAM_PRICING => {
                // An unparseable pricing value is treated as an absent key.
                if let Ok(pricing) = PricingModel::from_str(&decode_component(value)) {
                    patch.pricing = Some(Some(pricing));
                    recognized = true;
                }
            }
            _ => {}
        }
    }

    recognized.then_some(patch)
}

/// Split a comma-joined value, dropping empty segments and values that fail
/// to parse.
fn parse_list<T: Ord>(value: &str, parse: impl Fn(&str) -> Option<T>) -> BTreeSet<T> {
    value
        .split(',')
        .map(decode_component)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| parse(&segment))
        .collect()
}

fn decode_component(raw: &str) -> String {
    // Undecodable input stays as-is: the codec never fails.
    decode(raw).map(Cow::into_owned).unwrap_or_else(|_| raw.to_string())
}

// ============================================================================
// Encoding
// ============================================================================

/// Serialize criteria to a query string, omitting empty keys.
///
/// Returns `None` when every constraint is empty; the caller then resets to
/// the bare path instead of writing an empty query.
pub fn encode_query(criteria: &FilterCriteria) -> Option<String> {
    if criteria.is_empty() {
        return None;
    }

    let mut pairs: Vec<String> = Vec::new();
    if !criteria.search.is_empty() {
        pairs.push(format!("{PARAM_SEARCH}={}", encode(&criteria.search)));
    }
    if !criteria.status.is_empty() {
        pairs.push(format!(
            "{PARAM_STATUS}={}",
            join_encoded(criteria.status.iter().map(AgentStatus::as_str))
        ));
    }
    if !criteria.category.is_empty() {
        pairs.push(format!(
            "{PARAM_CATEGORY}={}",
            join_encoded(criteria.category.iter().map(String::as_str))
        ));
    }
    if let Some(pricing) = criteria.pricing {
        pairs.push(format!("{PARAM_PRICING}={}", encode(pricing.as_str())));
    }

    Some(pairs.join("&"))
}

fn join_encoded<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|v| encode(v).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

// ============================================================================
// Tests
// ============================================================================

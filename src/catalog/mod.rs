//! Catalog domain: records, filter criteria, and the store.

mod criteria;
mod record;
mod store;

pub use criteria::{matches, CriteriaPatch, FilterCriteria};
pub use record::{
    validate_records, AgentRecord, AgentStatus, PricingModel, RecordBatchError, UnknownValue,
};
pub use store::{CatalogFacets, CatalogStore};

//! Record sources: where the catalog's data comes from.
//!
//! Sources are read-only at runtime; the collection is loaded at startup or
//! on an explicit reload.

mod file;
mod http;

pub use file::FileRecordSource;
pub use http::{HttpRecordSource, DEFAULT_FETCH_TIMEOUT};

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::{AgentRecord, RecordBatchError};

/// Error loading a record batch.
///
/// Batch validation failures are fatal for the whole load; partial batches
/// are never returned.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid catalog data: {0}")]
    Data(#[from] RecordBatchError),
}

/// Asynchronous loader for an ordered record collection.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Load and validate the full collection.
    async fn load_all(&self) -> Result<Vec<AgentRecord>, SourceError>;
}

//! File-backed record source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::catalog::{validate_records, AgentRecord};

use super::{RecordSource, SourceError};

/// Loads the catalog from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn load_all(&self) -> Result<Vec<AgentRecord>, SourceError> {
        let contents = fs::read_to_string(&self.path).await?;
        let records: Vec<AgentRecord> = serde_json::from_str(&contents)?;
        validate_records(&records)?;
        Ok(records)
    }
}

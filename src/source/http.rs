//! HTTP-backed record source.

use std::time::Duration;

use async_trait::async_trait;

use crate::catalog::{validate_records, AgentRecord};

use super::{RecordSource, SourceError};

/// Default request timeout. A hung upstream resolves to a load failure
/// instead of leaving the caller's loading flag stuck.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the catalog JSON from a remote endpoint.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    url: String,
    client: reqwest::Client,
}

impl HttpRecordSource {
    pub fn new(url: impl Into<String>) -> Result<Self, SourceError> {
        Self::with_timeout(url, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn load_all(&self) -> Result<Vec<AgentRecord>, SourceError> {
        let records: Vec<AgentRecord> = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        validate_records(&records)?;
        Ok(records)
    }
}

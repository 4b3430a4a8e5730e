//! Catalog data file validation command.

use std::path::Path;

use anyhow::Result;

use agentdex::source::{FileRecordSource, RecordSource};

/// Validate a data file, printing the record count or failing with the first
/// violation.
pub async fn run(file: &Path) -> Result<()> {
    let records = FileRecordSource::new(file).load_all().await?;
    println!("{}: {} records OK", file.display(), records.len());
    Ok(())
}

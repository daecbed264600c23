use std::path::{Path, PathBuf};

use crate::types::MetricRecord;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read records from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid records in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses a JSON array of metric records.
pub fn parse_records(raw: &str) -> Result<Vec<MetricRecord>, serde_json::Error> {
    serde_json::from_str(raw)
}

pub fn load_records(path: &Path) -> Result<Vec<MetricRecord>, StoreError> {
    let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

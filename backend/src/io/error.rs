//! Error type for dataset loading.

use std::path::PathBuf;

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Why the launch table could not be loaded.
///
/// Every variant is fatal at startup; nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The remote resource could not be fetched or answered with a non-success status.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The local file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a readable CSV table.
    #[error("malformed CSV: {0}")]
    Malformed(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// A required cell is null or could not be converted.
    #[error("invalid value in column '{column}' at row {row}: {reason}")]
    InvalidValue {
        column: String,
        row: usize,
        reason: String,
    },

    #[error("dataset contains no launch records")]
    Empty,
}

impl LoadError {
    pub fn invalid_value(column: &str, row: usize, reason: impl Into<String>) -> Self {
        LoadError::InvalidValue {
            column: column.to_string(),
            row,
            reason: reason.into(),
        }
    }
}

impl From<polars::prelude::PolarsError> for LoadError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        LoadError::Malformed(err.to_string())
    }
}

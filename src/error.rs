//! Error type for loading projects and writing reports.
//!
//! The aggregation itself has no failure modes; only the I/O around it does.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Input file extension is neither `json` nor `csv`
    #[error("unsupported input format: {0} (expected .json or .csv)")]
    UnsupportedFormat(String),

    #[error("no projects loaded; load a project source first")]
    NoData,
}

impl AnalyticsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;

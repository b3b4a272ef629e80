use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a generate run.
///
/// Everything below this level (unreadable files, failed lookups) is
/// recovered per item and never surfaces here.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("configuration error: path does not exist: {}", .0.display())]
    Configuration(PathBuf),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize manifest: {0}")]
    Serialization(#[from] serde_json::Error),
}

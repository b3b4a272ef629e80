use std::path::PathBuf;

use thiserror::Error;

/// Per-file extraction failures. Callers log these and move on.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode {} with any of: {tried}", .path.display())]
    Decode { path: PathBuf, tried: String },
}

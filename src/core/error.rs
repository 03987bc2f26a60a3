use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GigError {
    #[error("terminal failure: {message}")]
    Terminal { message: String },
    #[error("failed to read records from '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse records from '{path}': {source}")]
    SourceParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid status filter '{value}' (expected 'all', 'pending', 'accepted', 'in_progress', 'completed', or 'rejected')")]
    InvalidStatusFilter { value: String },
}

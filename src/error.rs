//! Error types for reading input sources.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal input errors. A run stops at the first one.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid glob pattern: {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

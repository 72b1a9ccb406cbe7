//! Error types for book storage

use shelf_model::BookId;
use std::path::PathBuf;

/// Failure reading or writing the collection document
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Document could not be read or written
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document exists but is not a valid collection
    #[error("malformed collection document {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Collection could not be encoded
    #[error("failed to encode collection: {0}")]
    Encode(#[source] serde_json::Error),

    /// A stored record already holds the largest possible id
    #[error("no book id left after {max}")]
    IdSpaceExhausted { max: BookId },
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create malformed-document error for path
    pub fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }

    /// True when the document simply does not exist yet
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

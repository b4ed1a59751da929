//! Centralized error types for quoteref.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::attachment_ref::AttachmentRef;

/// All errors produced by the quoteref library.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// A stub was requested with neither a MIME type nor a source filename.
    #[error("Stub needs a MIME type or a source filename")]
    InvalidStub,

    /// The attachment store has no resource for this reference.
    #[error("Attachment not found: {0}")]
    AttachmentNotFound(AttachmentRef),

    /// I/O error with the associated file path.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("Invalid config '{path}': {reason}")]
    Config { path: PathBuf, reason: String },
}

/// Convenience alias for `Result<T, QuoteError>`.
pub type Result<T> = std::result::Result<T, QuoteError>;

impl QuoteError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

//! Error types for undocx library.

use std::io;
use thiserror::Error;

/// Result type alias for undocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout reconstruction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading or writing JSON (document models, options).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document cannot be opened or parsed at all.
    #[error("Document provider error: {0}")]
    Provider(String),

    /// The provider failed partway through the document.
    #[error("Corrupted document structure: {0}")]
    Corrupted(String),

    /// A table could not be rendered.
    #[error("Table rendering error: {0}")]
    TableRender(String),

    /// The layout options are inconsistent.
    #[error("Invalid layout options: {0}")]
    InvalidOptions(String),
}

impl Error {
    /// Check if the error aborts the whole document.
    ///
    /// Table failures and mid-document corruption are recovered by the
    /// walker; everything else is fatal for the document.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::TableRender(_) | Error::Corrupted(_))
    }
}

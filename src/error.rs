//! Error types shared across the crate.
//!
//! None of these reach the public lookup/format/persistence operations: each
//! is converted into a fallback value at that boundary.

use thiserror::Error;

/// Why a key path could not be turned into a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A segment along the path does not exist in the table.
    #[error("Translation key not found: '{path}' (missing segment '{segment}')")]
    NotFound { path: String, segment: String },

    /// The path stops at an intermediate node instead of a leaf.
    #[error("Translation key '{path}' points to a nested table, not a translation")]
    BranchNode { path: String },

    /// The leaf exists but has neither the requested nor the default language.
    #[error("Translation '{path}' has no entry for '{language}' or '{default_language}'")]
    MissingLanguage { path: String, language: String, default_language: String },
}

/// Failures of the durable key-value storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backend refuses every operation.
    #[error("Storage is unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the backing file failed.
    #[error("Failed to access storage file: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data is not the expected JSON shape.
    #[error("Failed to parse stored data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure reported by an audio cue backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to play sound cue '{cue}': {reason}")]
pub struct CueError {
    /// Name of the cue that failed.
    pub cue: String,
    /// Backend-specific description.
    pub reason: String,
}

impl CueError {
    #[must_use]
    pub fn new(cue: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { cue: cue.into(), reason: reason.into() }
    }
}

/// Errors while building a translation table from external data.
#[derive(Error, Debug)]
pub enum TableError {
    /// The document root is not a JSON object.
    #[error("Translation table root must be a JSON object, found {0}")]
    InvalidRoot(&'static str),

    /// The document is not valid JSON.
    #[error("Failed to parse translation table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An amount outside the closed set of reference amounts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unsupported reference amount: {0} (expected 500 or 400)")]
pub struct UnsupportedAmount(pub u32);

//! Error types for FileDB
//!
//! Provides a unified error type for the hard operations (`create`, `update`,
//! collection binding). Soft operations (`get`, `delete`, directory
//! create/remove) never surface these; they degrade to `None`/`false`.

use thiserror::Error;

/// Result type alias using FileDbError
pub type Result<T> = std::result::Result<T, FileDbError>;

/// Unified error type for FileDB operations
#[derive(Debug, Error)]
pub enum FileDbError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// Underlying filesystem error, passed through unchanged
    #[error(transparent)]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Document State Errors
    // -------------------------------------------------------------------------
    #[error("Document ({doc_id}) exists")]
    Conflict { doc_id: String },

    #[error("Document ({doc_id}) does not exist")]
    NotFound { doc_id: String },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Naming Errors
    // -------------------------------------------------------------------------
    #[error("Invalid {kind} name: {name:?}")]
    InvalidName { kind: NameKind, name: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FileDbError {
    /// True when a `create` hit an existing document
    pub fn is_conflict(&self) -> bool {
        matches!(self, FileDbError::Conflict { .. })
    }

    /// True when an `update` targeted an absent document
    pub fn is_not_found(&self) -> bool {
        matches!(self, FileDbError::NotFound { .. })
    }
}

impl From<serde_json::Error> for FileDbError {
    fn from(err: serde_json::Error) -> Self {
        FileDbError::Serialization(err.to_string())
    }
}

/// What kind of name failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Collection,
    Document,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Collection => f.write_str("collection"),
            NameKind::Document => f.write_str("document"),
        }
    }
}

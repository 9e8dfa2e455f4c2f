//! Error types for jsonstate
//!
//! Provides a unified error type for all driver operations, plus a
//! classification enum so callers can tell "record absent" apart from
//! real failures without inspecting messages.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for jsonstate operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("state not found: {id} ({})", .path.display())]
    NotFound { id: String, path: PathBuf },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Identifier Errors
    // -------------------------------------------------------------------------
    #[error("no free identifier after {attempts} attempts")]
    IdExhausted { attempts: usize },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Classification of a [`StoreError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The record has no backing file
    NotFound,

    /// A value could not be encoded to, or decoded from, JSON
    Serialization,

    /// Filesystem failure other than absence
    Io,

    /// Identifier allocation kept colliding with existing files
    IdExhausted,

    /// Invalid store configuration
    Config,
}

impl StoreError {
    /// Build a not-found error for an identifier and its derived path
    pub fn not_found(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        StoreError::NotFound {
            id: id.into(),
            path: path.into(),
        }
    }

    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::Serialization(_) => ErrorKind::Serialization,
            StoreError::Io(_) => ErrorKind::Io,
            StoreError::IdExhausted { .. } => ErrorKind::IdExhausted,
            StoreError::Config(_) => ErrorKind::Config,
        }
    }

    /// True if the record was absent
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Returns true exactly when `err` came from the driver's not-found path.
///
/// `None` (no error) is never a not-found.
pub fn is_state_not_found(err: Option<&StoreError>) -> bool {
    err.map_or(false, StoreError::is_not_found)
}

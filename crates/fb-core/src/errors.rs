//! Cross-cutting error types for Freebird.
//!
//! Domain-specific errors (`AuthError`, `StoreError`) live in their own crates.
//! The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Freebird crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, uniqueness, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The key/value backend failed to read or write.
    #[error("Storage error for key '{key}': {reason}")]
    Storage { key: String, reason: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a storage failure on `key`.
    pub fn storage(key: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Storage {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

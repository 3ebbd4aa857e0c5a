//! Store error types for fb-db.

use fb_core::errors::CoreError;
use thiserror::Error;

/// Errors from building or persisting stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Two records in one collection share an id or slug.
    #[error("duplicate {field} '{value}' in {collection}")]
    DuplicateKey {
        collection: &'static str,
        field: &'static str,
        value: String,
    },

    /// A record could not be encoded for storage.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The compiled-in seed data is malformed.
    #[error("invalid fixture data: {0}")]
    Fixture(String),

    /// The key/value backend failed.
    #[error(transparent)]
    Storage(#[from] CoreError),
}

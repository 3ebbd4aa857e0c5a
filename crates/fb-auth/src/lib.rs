//! # fb-auth
//!
//! Demo authentication for Freebird.
//!
//! Provides an unsecured session token (base64url JSON, no signature), a user
//! directory seeded from fixtures, the `SessionStore` state machine persisted
//! through a [`KeyValueStore`](fb_core::kv::KeyValueStore), and role/tier access
//! checks. None of this is a security boundary: tokens are trivially forgeable
//! and passwords are plaintext fixtures.

pub mod access;
pub mod claims;
pub mod directory;
pub mod error;
pub mod session;
pub mod token;

pub use access::{AccessDecision, AccessRequirement};
pub use claims::SessionClaims;
pub use directory::UserDirectory;
pub use error::AuthError;
pub use session::{SessionState, SessionStore};

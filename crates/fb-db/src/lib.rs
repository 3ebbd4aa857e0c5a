//! # fb-db
//!
//! Data stores for Freebird.
//!
//! - [`ContentStore`]: projects and articles seeded from fixtures, with
//!   filter/sort/paginate queries and admin deletes.
//! - [`SubscriberStore`] and [`MessageStore`]: insertion-ordered maps persisted
//!   as one JSON object each through a [`KeyValueStore`](fb_core::kv::KeyValueStore).
//! - [`JsonFileStore`]: a key/value backend kept in a single JSON file.
//!
//! Every store is an owned value built once per process from injected state;
//! nothing here is global.

pub mod content;
pub mod error;
pub mod file_kv;
pub mod filters;
pub mod fixtures;
pub mod messages;
mod persisted;
pub mod stats;
pub mod subscribers;

pub use content::ContentStore;
pub use error::StoreError;
pub use file_kv::JsonFileStore;
pub use filters::{ArticleFilter, ProjectFilter};
pub use fixtures::Seed;
pub use messages::MessageStore;
pub use subscribers::SubscriberStore;

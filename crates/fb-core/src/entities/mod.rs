//! Entity structs for all Freebird domain objects.
//!
//! Field names serialize in camelCase so fixtures and persisted storage values
//! keep the shape the site has always written. All structs derive `JsonSchema`
//! for schema validation in tests.

mod article;
mod message;
mod project;
mod subscriber;
mod tier;
mod user;

pub use article::Article;
pub use message::{ContactMessage, NewContactMessage};
pub use project::{KnowledgePoint, Project, ProjectResource};
pub use subscriber::Subscriber;
pub use tier::SubscriptionTierDetails;
pub use user::{NewUser, PublicUser, User, UserUpdate};

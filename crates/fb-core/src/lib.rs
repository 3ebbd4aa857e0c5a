//! # fb-core
//!
//! Core types and contracts shared by every Freebird crate.
//!
//! - Entity structs for projects, articles, users, subscribers and contact messages
//! - Role, subscription tier and article category enums with their hierarchies
//! - 1-indexed pagination (`Page`) used by every list query
//! - The `KeyValueStore` contract standing in for browser local storage
//! - Cross-cutting error types
//! - Response shapes shared between the stores and the CLI

pub mod entities;
pub mod enums;
pub mod errors;
pub mod kv;
pub mod page;
pub mod responses;

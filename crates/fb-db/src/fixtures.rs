//! Compiled-in seed data.
//!
//! `fixtures/seed.json` is embedded at build time, the same way schema files
//! are shipped with the binary rather than read from disk.

use fb_core::entities::{Article, Project, SubscriptionTierDetails, User};
use serde::Deserialize;

use crate::error::StoreError;

const SEED_JSON: &str = include_str!("../fixtures/seed.json");

/// Everything a fresh process starts with.
#[derive(Debug, Clone, Deserialize)]
pub struct Seed {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub articles: Vec<Article>,
    pub tiers: Vec<SubscriptionTierDetails>,
}

impl Seed {
    /// Parse the embedded seed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fixture` if the embedded JSON does not match the
    /// entity shapes.
    pub fn load() -> Result<Self, StoreError> {
        Self::from_json(SEED_JSON)
    }

    /// Parse a seed document with the same layout as the embedded one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fixture` on malformed input.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        serde_json::from_str(json).map_err(|e| StoreError::Fixture(e.to_string()))
    }
}

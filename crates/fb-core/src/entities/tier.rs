use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SubscriptionTier;

/// Catalog entry describing a subscription plan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubscriptionTierDetails {
    pub id: SubscriptionTier,
    pub name: String,
    /// Monthly price in whole dollars.
    pub price: u32,
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

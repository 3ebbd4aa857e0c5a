use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Role, SubscriptionTier};

/// A demo account, including its plaintext password.
///
/// Never leaves `fb-auth`; everything outside it sees [`PublicUser`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub subscription_tier: SubscriptionTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Strip the password.
    #[must_use]
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            subscription_tier: self.subscription_tier,
            avatar: self.avatar.clone(),
            created_at: self.created_at,
        }
    }
}

/// A user record without its password. This is the shape cached in storage
/// under the profile key and returned from every auth operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub subscription_tier: SubscriptionTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registration payload. Role and tier are always assigned by the directory.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<Role>,
    pub subscription_tier: Option<SubscriptionTier>,
}

impl UserUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.name.is_none()
            && self.avatar.is_none()
            && self.role.is_none()
            && self.subscription_tier.is_none()
    }

    /// Merge into a full user record.
    pub fn apply_to_user(&self, user: &mut User) {
        if let Some(ref email) = self.email {
            user.email.clone_from(email);
        }
        if let Some(ref password) = self.password {
            user.password.clone_from(password);
        }
        if let Some(ref name) = self.name {
            user.name.clone_from(name);
        }
        if let Some(ref avatar) = self.avatar {
            user.avatar = Some(avatar.clone());
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(tier) = self.subscription_tier {
            user.subscription_tier = tier;
        }
    }

    /// Merge into a public record. The password field has nowhere to go.
    pub fn apply_to_public(&self, user: &mut PublicUser) {
        if let Some(ref email) = self.email {
            user.email.clone_from(email);
        }
        if let Some(ref name) = self.name {
            user.name.clone_from(name);
        }
        if let Some(ref avatar) = self.avatar {
            user.avatar = Some(avatar.clone());
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(tier) = self.subscription_tier {
            user.subscription_tier = tier;
        }
    }
}

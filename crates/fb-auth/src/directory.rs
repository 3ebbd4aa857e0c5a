use chrono::{DateTime, Utc};
use fb_core::entities::{NewUser, PublicUser, User, UserUpdate};
use fb_core::enums::{Role, SubscriptionTier};

use crate::error::AuthError;

/// In-memory account list, seeded from fixtures at startup.
///
/// Registrations and profile updates live only as long as the directory.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    #[must_use]
    pub const fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Exact (case-sensitive) email and password match.
    #[must_use]
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
    }

    #[must_use]
    pub fn contains_email(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// All accounts, passwords stripped, in directory order.
    #[must_use]
    pub fn all_public(&self) -> Vec<PublicUser> {
        self.users.iter().map(User::to_public).collect()
    }

    /// Add a new account with role `user` and tier `free`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AlreadyRegistered` if the email is taken.
    pub fn register(&mut self, new_user: NewUser, now: DateTime<Utc>) -> Result<&User, AuthError> {
        if self.contains_email(&new_user.email) {
            return Err(AuthError::AlreadyRegistered(new_user.email));
        }
        let user = User {
            id: self.next_id(),
            email: new_user.email,
            password: new_user.password,
            name: new_user.name,
            role: Role::User,
            subscription_tier: SubscriptionTier::Free,
            avatar: new_user.avatar,
            created_at: now,
        };
        tracing::debug!(id = %user.id, email = %user.email, "registered user");
        self.users.push(user);
        let index = self.users.len() - 1;
        Ok(&self.users[index])
    }

    /// Fail if `email` belongs to an account other than `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AlreadyRegistered` when another account holds it.
    pub fn ensure_email_free(&self, email: &str, owner_id: &str) -> Result<(), AuthError> {
        match self.find_by_email(email) {
            Some(other) if other.id != owner_id => {
                Err(AuthError::AlreadyRegistered(email.to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Merge `update` into the account with `id`. Returns `false` when no such
    /// account exists.
    pub fn apply_update(&mut self, id: &str, update: &UserUpdate) -> bool {
        self.users.iter_mut().find(|u| u.id == id).is_some_and(|user| {
            update.apply_to_user(user);
            true
        })
    }

    /// Admin override of an account's tier. Returns the updated public record.
    pub fn set_subscription_tier(&mut self, id: &str, tier: SubscriptionTier) -> Option<PublicUser> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        user.subscription_tier = tier;
        Some(user.to_public())
    }

    /// `len + 1`, bumped while it collides with an existing id.
    fn next_id(&self) -> String {
        let mut candidate = self.users.len() + 1;
        while self.find_by_id(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}

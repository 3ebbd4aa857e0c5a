//! The single-user session state machine.
//!
//! `Unauthenticated` ⇄ `Authenticated(user)`. The token and the cached public
//! profile are written through to the key/value store on every transition so a
//! later process can [`SessionStore::restore`] the session.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use fb_core::entities::{NewUser, PublicUser, UserUpdate};
use fb_core::enums::{Role, SubscriptionTier};
use fb_core::kv::{self, KeyValueStore, keys};
use fb_core::responses::AuthResponse;

use crate::claims::SessionClaims;
use crate::directory::UserDirectory;
use crate::error::AuthError;
use crate::token;

/// Token lifetime when none is configured.
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(PublicUser),
}

impl SessionState {
    #[must_use]
    pub const fn user(&self) -> Option<&PublicUser> {
        match self {
            Self::Unauthenticated => None,
            Self::Authenticated(user) => Some(user),
        }
    }
}

pub struct SessionStore {
    directory: UserDirectory,
    storage: Arc<dyn KeyValueStore>,
    token_ttl: TimeDelta,
    state: SessionState,
}

impl SessionStore {
    /// Build a store and resume any persisted session that is still valid.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the backend cannot be read or cleared.
    /// A malformed or expired session is discarded, never reported.
    pub fn restore(
        directory: UserDirectory,
        storage: Arc<dyn KeyValueStore>,
        token_ttl: TimeDelta,
    ) -> Result<Self, AuthError> {
        Self::restore_at(directory, storage, token_ttl, Utc::now())
    }

    /// [`restore`](Self::restore) with an explicit clock.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the backend cannot be read or cleared.
    pub fn restore_at(
        directory: UserDirectory,
        storage: Arc<dyn KeyValueStore>,
        token_ttl: TimeDelta,
        now: DateTime<Utc>,
    ) -> Result<Self, AuthError> {
        let state = match load_persisted(storage.as_ref(), now)? {
            Persisted::Valid(user) => {
                tracing::debug!(id = %user.id, "restored session");
                SessionState::Authenticated(user)
            }
            Persisted::Empty => SessionState::Unauthenticated,
            Persisted::Discard(reason) => {
                tracing::warn!(%reason, "discarding persisted session");
                clear_persisted(storage.as_ref())?;
                SessionState::Unauthenticated
            }
        };

        Ok(Self {
            directory,
            storage,
            token_ttl,
            state,
        })
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&PublicUser> {
        self.state.user()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    #[must_use]
    pub const fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub const fn directory_mut(&mut self) -> &mut UserDirectory {
        &mut self.directory
    }

    /// Decoded claims of the persisted token, if one decodes.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the backend cannot be read.
    pub fn claims(&self) -> Result<Option<SessionClaims>, AuthError> {
        let Some(raw) = self.storage.get(keys::AUTH_TOKEN)? else {
            return Ok(None);
        };
        Ok(token::decode(&raw).ok())
    }

    /// Sign in with an exact email/password match.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when no account matches, or
    /// `AuthError::Storage` if the session cannot be persisted.
    pub fn login(&mut self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let user = self
            .directory
            .authenticate(email, password)
            .map(fb_core::entities::User::to_public)
            .ok_or(AuthError::InvalidCredentials)?;
        self.start_session(user, Utc::now())
    }

    /// Create an account (role `user`, tier `free`) and sign in as it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AlreadyRegistered` when the email exists, or
    /// `AuthError::Storage` if the session cannot be persisted.
    pub fn register(&mut self, new_user: NewUser) -> Result<AuthResponse, AuthError> {
        let now = Utc::now();
        let user = self.directory.register(new_user, now)?.to_public();
        self.start_session(user, now)
    }

    /// Drop the session. Safe to call when already signed out.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the persisted keys cannot be removed.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        clear_persisted(self.storage.as_ref())?;
        if let SessionState::Authenticated(ref user) = self.state {
            tracing::debug!(id = %user.id, "signed out");
        }
        self.state = SessionState::Unauthenticated;
        Ok(())
    }

    /// Merge `update` into the session user, the cached profile and the
    /// directory entry. Nothing changes unless the cached profile is written.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` without an active session,
    /// `AuthError::AlreadyRegistered` if the new email belongs to another
    /// account, or `AuthError::Storage` if the profile cannot be written.
    pub fn update_user(&mut self, update: &UserUpdate) -> Result<PublicUser, AuthError> {
        let current = self.current_user().ok_or(AuthError::NotAuthenticated)?;
        if let Some(email) = &update.email {
            self.directory.ensure_email_free(email, &current.id)?;
        }

        let mut user = current.clone();
        update.apply_to_public(&mut user);
        kv::put_json(self.storage.as_ref(), keys::USER, &user)?;

        if !self.directory.apply_update(&user.id, update) {
            tracing::debug!(id = %user.id, "session user not in directory; cache updated only");
        }
        self.state = SessionState::Authenticated(user.clone());
        Ok(user)
    }

    /// Move the session user to `tier`. Non-admins also become subscribers.
    ///
    /// # Errors
    ///
    /// Same as [`update_user`](Self::update_user).
    pub fn upgrade(&mut self, tier: SubscriptionTier) -> Result<PublicUser, AuthError> {
        let current = self.current_user().ok_or(AuthError::NotAuthenticated)?;
        let role = (current.role != Role::Admin).then_some(Role::Subscriber);
        self.update_user(&UserUpdate {
            subscription_tier: Some(tier),
            role,
            ..UserUpdate::default()
        })
    }

    fn start_session(
        &mut self,
        user: PublicUser,
        now: DateTime<Utc>,
    ) -> Result<AuthResponse, AuthError> {
        let token = token::issue(&user.id, now, self.token_ttl);
        self.storage.set(keys::AUTH_TOKEN, &token)?;
        kv::put_json(self.storage.as_ref(), keys::USER, &user)?;
        tracing::debug!(id = %user.id, "session started");
        self.state = SessionState::Authenticated(user.clone());
        Ok(AuthResponse { user, token })
    }
}

enum Persisted {
    Empty,
    Valid(PublicUser),
    Discard(String),
}

fn load_persisted(storage: &dyn KeyValueStore, now: DateTime<Utc>) -> Result<Persisted, AuthError> {
    let token = storage.get(keys::AUTH_TOKEN)?;
    let profile = storage.get(keys::USER)?;

    let (token, profile) = match (token, profile) {
        (None, None) => return Ok(Persisted::Empty),
        (Some(token), Some(profile)) => (token, profile),
        _ => return Ok(Persisted::Discard("incomplete session".into())),
    };

    let claims = match token::decode(&token) {
        Ok(claims) => claims,
        Err(e) => return Ok(Persisted::Discard(e.to_string())),
    };
    if claims.is_expired(now) {
        return Ok(Persisted::Discard(format!(
            "token expired at {}",
            claims.expires_at
        )));
    }

    let user: PublicUser = match serde_json::from_str(&profile) {
        Ok(user) => user,
        Err(e) => return Ok(Persisted::Discard(format!("corrupt cached profile: {e}"))),
    };
    if user.id != claims.user_id {
        return Ok(Persisted::Discard(format!(
            "cached profile {} does not match token user {}",
            user.id, claims.user_id
        )));
    }

    Ok(Persisted::Valid(user))
}

fn clear_persisted(storage: &dyn KeyValueStore) -> Result<(), AuthError> {
    storage.remove(keys::AUTH_TOKEN)?;
    storage.remove(keys::USER)?;
    Ok(())
}

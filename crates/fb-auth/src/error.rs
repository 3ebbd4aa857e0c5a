use fb_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email already registered: {0}")]
    AlreadyRegistered(String),

    #[error("not authenticated; run `freebird auth login`")]
    NotAuthenticated,

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("invalid session token: {0}")]
    InvalidToken(String),

    #[error(transparent)]
    Storage(#[from] CoreError),
}

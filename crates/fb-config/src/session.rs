//! Session token configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_token_ttl_days() -> u32 {
    7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Lifetime of an issued session token, in days.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_ttl_days: default_token_ttl_days(),
        }
    }
}

impl SessionConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.token_ttl_days == 0 {
            return Err(ConfigError::invalid(
                "session.token_ttl_days",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

//! Content listing defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_project_page_size() -> usize {
    6
}

const fn default_article_page_size() -> usize {
    9
}

const fn default_recent_limit() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Projects per page when a query does not specify one.
    #[serde(default = "default_project_page_size")]
    pub project_page_size: usize,

    /// Articles per page when a query does not specify one.
    #[serde(default = "default_article_page_size")]
    pub article_page_size: usize,

    /// Default length of the "recent articles" list.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_page_size: default_project_page_size(),
            article_page_size: default_article_page_size(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl ContentConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.project_page_size == 0 {
            return Err(ConfigError::invalid(
                "content.project_page_size",
                "must be at least 1",
            ));
        }
        if self.article_page_size == 0 {
            return Err(ConfigError::invalid(
                "content.article_page_size",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_size_is_rejected() {
        let config = ContentConfig {
            article_page_size: 0,
            ..ContentConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("content.article_page_size"));
    }
}

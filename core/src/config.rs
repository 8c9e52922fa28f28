//! Where the remote collection lives and whose items to show.

use std::num::ParseIntError;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://mate.academy/students-api";
pub const DEFAULT_USER_ID: u64 = 3582;

pub const BASE_URL_VAR: &str = "TODO_API_URL";
pub const USER_ID_VAR: &str = "TODO_USER_ID";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidUserId {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub user_id: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID,
        }
    }
}

impl Config {
    pub fn new(base_url: impl Into<String>, user_id: u64) -> Self {
        Self {
            base_url: base_url.into(),
            user_id,
        }
    }

    /// Reads `TODO_API_URL` and `TODO_USER_ID`, falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(value) = lookup(USER_ID_VAR) {
            config.user_id = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidUserId {
                    var: USER_ID_VAR,
                    value,
                    source,
                })?;
        }
        Ok(config)
    }
}

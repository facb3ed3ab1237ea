//! Configuration types and loading

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const ENV_USERNAME_MIN_LENGTH: &str = "RECORDS_ADMIN_USERNAME_MIN_LENGTH";
pub const ENV_PASSWORD_MIN_LENGTH: &str = "RECORDS_ADMIN_PASSWORD_MIN_LENGTH";
pub const ENV_SUBMIT_FAILED_MESSAGE: &str = "RECORDS_ADMIN_SUBMIT_FAILED_MESSAGE";

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AdminConfig {
    /// User form configuration
    pub form: FormConfig,
}

/// Rules and messages used by the user form
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormConfig {
    /// Minimum username length, in characters
    pub username_min_length: usize,
    /// Minimum password length, in characters
    pub password_min_length: usize,
    /// Top-level message shown when saving fails
    pub submit_failed_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            username_min_length: 3,
            password_min_length: 6,
            submit_failed_message: "Failed to save user. Please try again.".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl AdminConfig {
    /// Load a `.env` file if one exists, then read the environment
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_env()
    }

    /// Build configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup(ENV_USERNAME_MIN_LENGTH) {
            config.form.username_min_length = parse_value(ENV_USERNAME_MIN_LENGTH, &v)?;
        }
        if let Some(v) = lookup(ENV_PASSWORD_MIN_LENGTH) {
            config.form.password_min_length = parse_value(ENV_PASSWORD_MIN_LENGTH, &v)?;
        }
        if let Some(v) = lookup(ENV_SUBMIT_FAILED_MESSAGE) {
            if !v.trim().is_empty() {
                config.form.submit_failed_message = v;
            }
        }

        Ok(config)
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}

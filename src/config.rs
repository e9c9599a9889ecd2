//! Configuration management for the contact form.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Every setting has a default, so an empty
//! environment is a valid configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,

    /// Compare contact names case-sensitively when checking for
    /// duplicates (default: false)
    pub case_sensitive_names: bool,

    /// Re-validate an edited field after the first submit attempt
    /// (default: true)
    pub revalidate_on_change: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `CONTACT_FORM_CASE_SENSITIVE_NAMES`: `true`/`false` (default: false)
    /// - `CONTACT_FORM_REVALIDATE_ON_CHANGE`: `true`/`false` (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine, a malformed one is not.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Config::default();

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let case_sensitive_names = Self::parse_env_bool(
            "CONTACT_FORM_CASE_SENSITIVE_NAMES",
            defaults.case_sensitive_names,
        )?;
        let revalidate_on_change = Self::parse_env_bool(
            "CONTACT_FORM_REVALIDATE_ON_CHANGE",
            defaults.revalidate_on_change,
        )?;

        Ok(Config {
            log_level,
            case_sensitive_names,
            revalidate_on_change,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            case_sensitive_names: false,
            revalidate_on_change: true,
        }
    }
}

//! Error types for the contact form crate.
//!
//! Field validation problems are not errors at this level; they live in
//! [`crate::domain::ValidationError`] and stay inside the form. These types
//! cover configuration and the console front end.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors that can occur while driving the form from a text console.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Reading input or writing output failed
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

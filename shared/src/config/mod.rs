//! Configuration module
//!
//! - `auth` - Access/refresh token secrets, lifetimes and cookie max-ages
//! - `duration` - Parsing of human readable durations such as `"15m"`

pub mod auth;
pub mod duration;

use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, TokenConfig};
pub use duration::{parse_duration, parse_whole_seconds};

/// Errors raised while loading or validating configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration value: {key}")]
    MissingValue { key: String },

    #[error("Invalid duration for {key}: {value:?}")]
    InvalidDuration { key: String, value: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

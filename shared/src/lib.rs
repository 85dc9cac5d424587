//! Shared configuration and common types for the Student Workflow Organizer server
//!
//! This crate provides functionality used across the server crates:
//! - Token configuration and duration parsing
//! - Error response structures and error codes

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, ConfigError, TokenConfig};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};

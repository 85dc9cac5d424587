//! # Student Workflow Organizer Core
//!
//! Token issuance and verification for the authentication layer.
//! This crate contains the token claims entity, the cookie descriptor,
//! the token service and the error types callers map to HTTP responses.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, TokenCookie, TokenKind};
pub use errors::{DomainError, DomainResult, TokenError};
pub use services::token::{TokenService, TokenServiceConfig};

//! Domain-specific error types and error handling.

mod types;

pub use types::TokenError;

use jsonwebtoken::errors::ErrorKind;
use swo_shared::{error_codes, ConfigError, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Missing or invalid secret, duration or algorithm
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error(transparent)]
    Token(#[from] TokenError),

    /// Verification failure reported by the signing library, passed through as-is
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl DomainError {
    /// HTTP status code callers should respond with
    pub fn status_code(&self) -> u16 {
        match self {
            DomainError::Configuration(_) => 500,
            DomainError::Token(err) => err.status_code(),
            DomainError::Jwt(_) => 401,
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            // Configuration details stay in the logs
            DomainError::Configuration(_) => {
                ErrorResponse::new(error_codes::CONFIGURATION_ERROR, "Internal server error")
            }
            DomainError::Token(err) => err.to_error_response(),
            DomainError::Jwt(err) => verification_error_response(err),
        }
    }
}

/// Error body for a failed access token verification
///
/// Expired tokens get their own code so clients know to refresh.
pub fn verification_error_response(err: &jsonwebtoken::errors::Error) -> ErrorResponse {
    match err.kind() {
        ErrorKind::ExpiredSignature => {
            ErrorResponse::new(error_codes::TOKEN_EXPIRED, "Token expired")
        }
        _ => ErrorResponse::new(error_codes::TOKEN_INVALID, "Invalid token"),
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

//! Token-related error types

use swo_shared::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Token errors surfaced to callers of the token service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Any refresh token verification failure; the cause is deliberately masked
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// HTTP status code callers should respond with
    pub fn status_code(&self) -> u16 {
        match self {
            TokenError::InvalidRefreshToken => 400,
            TokenError::TokenGenerationFailed => 500,
        }
    }

    /// Stable error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::InvalidRefreshToken => error_codes::INVALID_REFRESH_TOKEN,
            TokenError::TokenGenerationFailed => error_codes::INTERNAL_ERROR,
        }
    }
}

impl IntoErrorResponse for TokenError {
    fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.error_code(), self.to_string())
    }
}

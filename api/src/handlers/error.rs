use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use swo_core::errors::{verification_error_response, DomainError};
use swo_shared::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Errors raised by the HTTP layer
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Missing access token")]
    MissingToken,

    #[error("Token verification is not configured")]
    NotConfigured,
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ApiError::Domain(DomainError::from(err))
    }
}

impl IntoErrorResponse for ApiError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            ApiError::Domain(err) => err.to_error_response(),
            ApiError::MissingToken => {
                ErrorResponse::new(error_codes::UNAUTHORIZED, "Authentication required")
            }
            ApiError::NotConfigured => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_error_response())
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match &error {
        DomainError::Configuration(_) => log::error!("Domain Error: {:?}", error),
        _ => log::debug!("Domain Error: {}", error),
    }
    ApiError::Domain(error).error_response()
}

/// Handle a failed access token verification (always 401)
pub fn handle_verification_error(error: &jsonwebtoken::errors::Error) -> HttpResponse {
    log::debug!("Access token rejected: {}", error);
    HttpResponse::Unauthorized().json(verification_error_response(error))
}

//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - Access and refresh token issuance
//! - Cookie descriptors for carrying tokens in responses
//! - Access and refresh token verification

mod config;
mod service;


pub use config::{TokenKindConfig, TokenServiceConfig};
pub use service::TokenService;

//! Business services containing domain logic.

pub mod token;

// Re-export commonly used types
pub use token::{TokenKindConfig, TokenService, TokenServiceConfig};

//! Domain entities representing tokens and the cookies that carry them.

pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use token::{
    Claims, TokenCookie, TokenKind,
    ACCESS_TOKEN_COOKIE_NAME, REFRESH_TOKEN_COOKIE_NAME,
};

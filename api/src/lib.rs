//! HTTP layer: token cookies, error responses and authentication middleware

pub mod cookies;
pub mod handlers;
pub mod middleware;

pub use cookies::TokenCookieExt;
pub use handlers::error::ApiError;
pub use middleware::auth::{AuthContext, JwtAuth, OptionalAuth};

pub mod error;

pub use error::{handle_domain_error, handle_verification_error, ApiError};

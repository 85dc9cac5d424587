//! Configuration for the token service

use chrono::Duration;
use jsonwebtoken::Algorithm;
use swo_shared::{AuthConfig, ConfigError, TokenConfig};

/// Signing secret and lifetimes for one token kind
#[derive(Debug, Clone)]
pub struct TokenKindConfig {
    /// HMAC signing secret
    pub secret: String,
    /// Lifetime embedded in the token's `exp` claim
    pub lifetime: Duration,
    /// Max-Age of the cookie carrying the token, in seconds
    pub cookie_max_age: i64,
}

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Access token settings
    pub access: TokenKindConfig,
    /// Refresh token settings
    pub refresh: TokenKindConfig,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
}

impl TokenServiceConfig {
    /// Creates a configuration with the given secrets and default lifetimes
    /// (15 minute access tokens, 7 day refresh tokens, matching cookie max-ages)
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access: TokenKindConfig {
                secret: access_secret.into(),
                lifetime: Duration::minutes(15),
                cookie_max_age: 15 * 60,
            },
            refresh: TokenKindConfig {
                secret: refresh_secret.into(),
                lifetime: Duration::days(7),
                cookie_max_age: 7 * 24 * 60 * 60,
            },
            algorithm: Algorithm::HS256,
        }
    }
}

impl TryFrom<&TokenConfig> for TokenKindConfig {
    type Error = ConfigError;

    fn try_from(config: &TokenConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            secret: config.secret.clone(),
            lifetime: config.expiry_duration()?,
            cookie_max_age: config.cookie_max_age_seconds()?,
        })
    }
}

impl TryFrom<&AuthConfig> for TokenServiceConfig {
    type Error = ConfigError;

    fn try_from(config: &AuthConfig) -> Result<Self, Self::Error> {
        let algorithm = config
            .algorithm
            .parse::<Algorithm>()
            .map_err(|_| ConfigError::InvalidValue {
                key: "algorithm".to_string(),
                message: format!("unknown algorithm {:?}", config.algorithm),
            })?;

        Ok(Self {
            access: TokenKindConfig::try_from(&config.access)?,
            refresh: TokenKindConfig::try_from(&config.refresh)?,
            algorithm,
        })
    }
}

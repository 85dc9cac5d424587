//! Access/refresh token configuration

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::duration::{parse_duration, parse_whole_seconds};
use super::ConfigError;

/// Environment variable names read by [`AuthConfig::from_env`]
pub mod env_keys {
    pub const ACCESS_TOKEN_SECRET: &str = "ACCESS_TOKEN_SECRET";
    pub const ACCESS_TOKEN_EXPIRY_TIME: &str = "ACCESS_TOKEN_EXPIRY_TIME";
    pub const ACCESS_TOKEN_COOKIE_EXPIRY_TIME: &str = "ACCESS_TOKEN_COOKIE_EXPIRY_TIME";
    pub const REFRESH_TOKEN_SECRET: &str = "REFRESH_TOKEN_SECRET";
    pub const REFRESH_TOKEN_EXPIRY_TIME: &str = "REFRESH_TOKEN_EXPIRY_TIME";
    pub const REFRESH_TOKEN_COOKIE_EXPIRY_TIME: &str = "REFRESH_TOKEN_COOKIE_EXPIRY_TIME";
    pub const JWT_ALGORITHM: &str = "JWT_ALGORITHM";
}

/// Settings for a single token kind (access or refresh)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Secret used to sign and verify tokens of this kind
    pub secret: String,

    /// Lifetime embedded in the token's `exp` claim, e.g. `"15m"`
    pub expiry: String,

    /// Max-Age of the cookie carrying the token, e.g. `"900"`
    pub cookie_max_age: String,
}

impl TokenConfig {
    fn new(secret: impl Into<String>, expiry: &str, cookie_max_age: &str) -> Self {
        Self {
            secret: secret.into(),
            expiry: expiry.to_string(),
            cookie_max_age: cookie_max_age.to_string(),
        }
    }

    /// Parsed token lifetime
    pub fn expiry_duration(&self) -> Result<Duration, ConfigError> {
        parse_duration("expiry", &self.expiry)
    }

    /// Parsed cookie max-age in whole seconds
    pub fn cookie_max_age_seconds(&self) -> Result<i64, ConfigError> {
        parse_whole_seconds("cookie_max_age", &self.cookie_max_age)
    }
}

/// Complete token configuration for the authentication layer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Access token settings
    pub access: TokenConfig,

    /// Refresh token settings
    pub refresh: TokenConfig,

    /// HMAC algorithm name (HS256, HS384 or HS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl AuthConfig {
    /// Create a configuration with the given secrets and default lifetimes
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access: TokenConfig::new(
                access_secret,
                DEFAULT_ACCESS_TOKEN_EXPIRY,
                DEFAULT_ACCESS_TOKEN_COOKIE_MAX_AGE,
            ),
            refresh: TokenConfig::new(
                refresh_secret,
                DEFAULT_REFRESH_TOKEN_EXPIRY,
                DEFAULT_REFRESH_TOKEN_COOKIE_MAX_AGE,
            ),
            algorithm: default_algorithm(),
        }
    }

    /// Set the access token lifetime
    pub fn with_access_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.access.expiry = expiry.into();
        self
    }

    /// Set the refresh token lifetime
    pub fn with_refresh_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.refresh.expiry = expiry.into();
        self
    }

    /// Set the access token cookie max-age
    pub fn with_access_cookie_max_age(mut self, max_age: impl Into<String>) -> Self {
        self.access.cookie_max_age = max_age.into();
        self
    }

    /// Set the refresh token cookie max-age
    pub fn with_refresh_cookie_max_age(mut self, max_age: impl Into<String>) -> Self {
        self.refresh.cookie_max_age = max_age.into();
        self
    }

    /// Set the signing algorithm
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Load configuration from the process environment
    ///
    /// A `.env` file in the working directory is loaded first when present.
    /// Both secrets are required; every other value falls back to its default.
    /// All durations are parsed eagerly so a bad value fails at start-up.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingValue { key: key.to_string() })
        };
        let optional = |key: &str, default: &str| -> Result<String, ConfigError> {
            let value = lookup(key).unwrap_or_else(|| default.to_string());
            parse_duration(key, &value)?;
            Ok(value)
        };
        let max_age = |key: &str, default: &str| -> Result<String, ConfigError> {
            let value = lookup(key).unwrap_or_else(|| default.to_string());
            parse_whole_seconds(key, &value)?;
            Ok(value)
        };

        let config = Self {
            access: TokenConfig {
                secret: required(env_keys::ACCESS_TOKEN_SECRET)?,
                expiry: optional(env_keys::ACCESS_TOKEN_EXPIRY_TIME, DEFAULT_ACCESS_TOKEN_EXPIRY)?,
                cookie_max_age: max_age(
                    env_keys::ACCESS_TOKEN_COOKIE_EXPIRY_TIME,
                    DEFAULT_ACCESS_TOKEN_COOKIE_MAX_AGE,
                )?,
            },
            refresh: TokenConfig {
                secret: required(env_keys::REFRESH_TOKEN_SECRET)?,
                expiry: optional(env_keys::REFRESH_TOKEN_EXPIRY_TIME, DEFAULT_REFRESH_TOKEN_EXPIRY)?,
                cookie_max_age: max_age(
                    env_keys::REFRESH_TOKEN_COOKIE_EXPIRY_TIME,
                    DEFAULT_REFRESH_TOKEN_COOKIE_MAX_AGE,
                )?,
            },
            algorithm: lookup(env_keys::JWT_ALGORITHM).unwrap_or_else(default_algorithm),
        };

        Ok(config)
    }
}

/// Default access token lifetime
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: &str = "15m";

/// Default refresh token lifetime
pub const DEFAULT_REFRESH_TOKEN_EXPIRY: &str = "7d";

/// Default access token cookie max-age (15 minutes)
pub const DEFAULT_ACCESS_TOKEN_COOKIE_MAX_AGE: &str = "900";

/// Default refresh token cookie max-age (7 days)
pub const DEFAULT_REFRESH_TOKEN_COOKIE_MAX_AGE: &str = "604800";

fn default_algorithm() -> String {
    String::from("HS256")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::new("access-secret", "refresh-secret");
        assert_eq!(config.algorithm, "HS256");
        assert_eq!(config.access.expiry_duration().unwrap(), Duration::minutes(15));
        assert_eq!(config.refresh.expiry_duration().unwrap(), Duration::days(7));
        assert_eq!(config.access.cookie_max_age_seconds().unwrap(), 900);
        assert_eq!(config.refresh.cookie_max_age_seconds().unwrap(), 604800);
    }

    #[test]
    fn test_auth_config_builder() {
        let config = AuthConfig::new("a", "r")
            .with_access_expiry("5m")
            .with_refresh_expiry("30d")
            .with_access_cookie_max_age("300")
            .with_refresh_cookie_max_age("1h")
            .with_algorithm("HS512");

        assert_eq!(config.access.expiry_duration().unwrap(), Duration::minutes(5));
        assert_eq!(config.refresh.expiry_duration().unwrap(), Duration::days(30));
        assert_eq!(config.access.cookie_max_age_seconds().unwrap(), 300);
        assert_eq!(config.refresh.cookie_max_age_seconds().unwrap(), 3600);
        assert_eq!(config.algorithm, "HS512");
    }

    #[test]
    fn test_from_lookup_reads_all_values() {
        let config = AuthConfig::from_lookup(lookup_from(&[
            (env_keys::ACCESS_TOKEN_SECRET, "a-secret"),
            (env_keys::REFRESH_TOKEN_SECRET, "r-secret"),
            (env_keys::ACCESS_TOKEN_EXPIRY_TIME, "10m"),
            (env_keys::REFRESH_TOKEN_EXPIRY_TIME, "14d"),
            (env_keys::ACCESS_TOKEN_COOKIE_EXPIRY_TIME, "600"),
            (env_keys::REFRESH_TOKEN_COOKIE_EXPIRY_TIME, "1209600"),
            (env_keys::JWT_ALGORITHM, "HS384"),
        ]))
        .unwrap();

        assert_eq!(config.access.secret, "a-secret");
        assert_eq!(config.refresh.secret, "r-secret");
        assert_eq!(config.access.expiry, "10m");
        assert_eq!(config.refresh.expiry, "14d");
        assert_eq!(config.access.cookie_max_age, "600");
        assert_eq!(config.refresh.cookie_max_age, "1209600");
        assert_eq!(config.algorithm, "HS384");
    }

    #[test]
    fn test_from_lookup_applies_defaults() {
        let config = AuthConfig::from_lookup(lookup_from(&[
            (env_keys::ACCESS_TOKEN_SECRET, "a-secret"),
            (env_keys::REFRESH_TOKEN_SECRET, "r-secret"),
        ]))
        .unwrap();

        assert_eq!(config, AuthConfig::new("a-secret", "r-secret"));
    }

    #[test]
    fn test_from_lookup_requires_secrets() {
        let err = AuthConfig::from_lookup(lookup_from(&[(env_keys::REFRESH_TOKEN_SECRET, "r")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingValue { ref key } if key == env_keys::ACCESS_TOKEN_SECRET));

        let err = AuthConfig::from_lookup(lookup_from(&[
            (env_keys::ACCESS_TOKEN_SECRET, "a"),
            (env_keys::REFRESH_TOKEN_SECRET, "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingValue { ref key } if key == env_keys::REFRESH_TOKEN_SECRET));
    }

    #[test]
    fn test_from_lookup_rejects_bad_duration() {
        let err = AuthConfig::from_lookup(lookup_from(&[
            (env_keys::ACCESS_TOKEN_SECRET, "a"),
            (env_keys::REFRESH_TOKEN_SECRET, "r"),
            (env_keys::REFRESH_TOKEN_COOKIE_EXPIRY_TIME, "soon"),
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidDuration { ref key, .. } if key == env_keys::REFRESH_TOKEN_COOKIE_EXPIRY_TIME
        ));
    }

    #[test]
    fn test_cookie_max_age_must_be_whole_seconds() {
        let config = AuthConfig::new("a", "r").with_access_cookie_max_age("1500ms");
        assert!(matches!(
            config.access.cookie_max_age_seconds(),
            Err(ConfigError::InvalidValue { .. })
        ));

        let err = AuthConfig::from_lookup(lookup_from(&[
            (env_keys::ACCESS_TOKEN_SECRET, "a"),
            (env_keys::REFRESH_TOKEN_SECRET, "r"),
            (env_keys::ACCESS_TOKEN_COOKIE_EXPIRY_TIME, "1500ms"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref key, .. } if key == env_keys::ACCESS_TOKEN_COOKIE_EXPIRY_TIME
        ));
    }
}

//! Token entities for JWT-based authentication.

use std::fmt;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::TokenError;

/// Name of the cookie carrying the access token
pub const ACCESS_TOKEN_COOKIE_NAME: &str = "access_token";

/// Name of the cookie carrying the refresh token
pub const REFRESH_TOKEN_COOKIE_NAME: &str = "refresh_token";

/// The two kinds of token the service signs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Short-lived credential proving identity for API calls
    Access,
    /// Longer-lived credential used to obtain new access tokens
    Refresh,
}

impl TokenKind {
    /// Name of the cookie that carries this kind of token
    pub fn cookie_name(&self) -> &'static str {
        match self {
            TokenKind::Access => ACCESS_TOKEN_COOKIE_NAME,
            TokenKind::Refresh => REFRESH_TOKEN_COOKIE_NAME,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// Claims structure for JWT payload
///
/// The subject identifier is the only custom claim. Tokens minted by the
/// previous backend carried it as `_id`, which is still accepted on decode;
/// when a payload has both keys, `subjectId` wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClaims")]
pub struct Claims {
    /// Subject identifier (e.g. a user ID)
    #[serde(rename = "subjectId")]
    pub subject_id: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `subject_id` that expire `lifetime` from now
    ///
    /// Fails with `TokenGenerationFailed` if the expiry is not representable.
    pub fn new(subject_id: impl Into<String>, lifetime: Duration) -> Result<Self, TokenError> {
        let now = Utc::now();
        let expiry = now
            .checked_add_signed(lifetime)
            .ok_or(TokenError::TokenGenerationFailed)?;

        Ok(Self {
            subject_id: subject_id.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        })
    }
}

/// Wire form of [`Claims`], accepting either subject key
#[derive(Deserialize)]
struct RawClaims {
    #[serde(rename = "subjectId")]
    subject_id: Option<String>,
    #[serde(rename = "_id")]
    legacy_id: Option<String>,
    iat: i64,
    exp: i64,
}

impl TryFrom<RawClaims> for Claims {
    type Error = String;

    fn try_from(raw: RawClaims) -> Result<Self, Self::Error> {
        let subject_id = raw
            .subject_id
            .or(raw.legacy_id)
            .ok_or_else(|| String::from("missing field `subjectId`"))?;

        Ok(Self {
            subject_id,
            iat: raw.iat,
            exp: raw.exp,
        })
    }
}

/// A `Set-Cookie` value carrying a token
///
/// Attributes are fixed: the cookie is HTTP-only, secure-transport-only and
/// `SameSite=Strict`. `max_age` is the cookie lifetime, configured separately
/// from the token's own `exp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCookie {
    name: &'static str,
    value: String,
    max_age: i64,
}

impl TokenCookie {
    /// Creates a cookie for a token of the given kind
    pub fn new(kind: TokenKind, value: impl Into<String>, max_age: i64) -> Self {
        Self {
            name: kind.cookie_name(),
            value: value.into(),
            max_age,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cookie lifetime in seconds
    pub fn max_age(&self) -> i64 {
        self.max_age
    }
}

impl fmt::Display for TokenCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}; HttpOnly; Secure; SameSite=Strict; Max-Age={}",
            self.name, self.value, self.max_age
        )
    }
}

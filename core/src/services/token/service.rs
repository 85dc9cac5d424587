//! Main token service implementation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use swo_shared::{AuthConfig, ConfigError};

use crate::domain::entities::token::{Claims, TokenCookie, TokenKind};
use crate::errors::{DomainError, TokenError};

use super::config::{TokenKindConfig, TokenServiceConfig};

/// Key material and lifetimes for one token kind
#[derive(Clone)]
struct SigningKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
    cookie_max_age: i64,
}

impl SigningKeys {
    fn from_config(kind: TokenKind, config: &TokenKindConfig) -> Result<Self, ConfigError> {
        if config.secret.is_empty() {
            return Err(ConfigError::MissingValue {
                key: format!("{}.secret", kind),
            });
        }
        if config.lifetime < Duration::zero() {
            return Err(ConfigError::InvalidValue {
                key: format!("{}.lifetime", kind),
                message: "lifetime must not be negative".to_string(),
            });
        }
        if Utc::now().checked_add_signed(config.lifetime).is_none() {
            return Err(ConfigError::InvalidValue {
                key: format!("{}.lifetime", kind),
                message: "lifetime is too large".to_string(),
            });
        }
        if config.cookie_max_age < 0 {
            return Err(ConfigError::InvalidValue {
                key: format!("{}.cookie_max_age", kind),
                message: "cookie max-age must not be negative".to_string(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            lifetime: config.lifetime,
            cookie_max_age: config.cookie_max_age,
        })
    }
}

/// Service for issuing and verifying access and refresh tokens
///
/// Holds only immutable key material; share it behind an `Arc` (or
/// `web::Data`) and call it concurrently without locking.
#[derive(Clone)]
pub struct TokenService {
    access: SigningKeys,
    refresh: SigningKeys,
    algorithm: Algorithm,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Configuration` if a secret is
    /// empty, a lifetime is negative or the algorithm is not HMAC based
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if !matches!(
            config.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(ConfigError::InvalidValue {
                key: "algorithm".to_string(),
                message: format!("{:?} is not an HMAC algorithm", config.algorithm),
            }
            .into());
        }

        let access = SigningKeys::from_config(TokenKind::Access, &config.access)?;
        let refresh = SigningKeys::from_config(TokenKind::Refresh, &config.refresh)?;

        if config.access.secret == config.refresh.secret {
            tracing::warn!(
                event = "token_secrets_shared",
                "Access and refresh tokens share a signing secret; refresh tokens will verify as access tokens"
            );
        }

        let mut validation = Validation::new(config.algorithm);
        validation.leeway = 0;
        validation.validate_exp = true;

        Ok(Self {
            access,
            refresh,
            algorithm: config.algorithm,
            validation,
        })
    }

    /// Creates a token service from the loaded authentication configuration
    pub fn from_auth_config(config: &AuthConfig) -> Result<Self, DomainError> {
        let config = TokenServiceConfig::try_from(config)?;
        Self::new(config)
    }

    fn keys(&self, kind: TokenKind) -> &SigningKeys {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    /// Issues a signed access token for `subject_id`
    pub fn issue_access_token(&self, subject_id: &str) -> Result<String, DomainError> {
        self.issue(TokenKind::Access, subject_id)
    }

    /// Issues a signed refresh token for `subject_id`
    pub fn issue_refresh_token(&self, subject_id: &str) -> Result<String, DomainError> {
        self.issue(TokenKind::Refresh, subject_id)
    }

    fn issue(&self, kind: TokenKind, subject_id: &str) -> Result<String, DomainError> {
        let keys = self.keys(kind);
        let claims = Claims::new(subject_id, keys.lifetime)?;

        let token = encode(&Header::new(self.algorithm), &claims, &keys.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        tracing::debug!(
            event = "token_issued",
            kind = %kind,
            expires_at = claims.exp,
            "Token issued"
        );

        Ok(token)
    }

    /// Cookie carrying an access token, with the access cookie max-age
    pub fn access_token_cookie(&self, token: &str) -> TokenCookie {
        TokenCookie::new(TokenKind::Access, token, self.access.cookie_max_age)
    }

    /// Cookie carrying a refresh token, with the refresh cookie max-age
    pub fn refresh_token_cookie(&self, token: &str) -> TokenCookie {
        TokenCookie::new(TokenKind::Refresh, token, self.refresh.cookie_max_age)
    }

    /// Verifies an access token and returns the claims
    ///
    /// Failures (bad signature, malformed token, expired token) are returned
    /// exactly as the JWT library reports them.
    pub async fn verify_access_token(
        &self,
        token: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        self.verify(TokenKind::Access, token)
    }

    /// Verifies a refresh token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError::Token(TokenError::InvalidRefreshToken))` - On any failure
    pub async fn verify_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.verify(TokenKind::Refresh, token).map_err(|e| {
            tracing::debug!(
                event = "refresh_token_rejected",
                reason = ?e.kind(),
                "Refresh token verification failed"
            );
            DomainError::Token(TokenError::InvalidRefreshToken)
        })
    }

    fn verify(&self, kind: TokenKind, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.keys(kind).decoding_key, &self.validation)
            .map(|data| data.claims)
    }
}

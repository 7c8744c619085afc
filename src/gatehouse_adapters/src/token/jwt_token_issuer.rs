use chrono::Utc;
use gatehouse_core::{SessionClaims, SessionToken, TokenIssuer, TokenIssuerError, UserId};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::TOKEN_TTL_IN_SECONDS;

#[derive(Clone)]
pub struct JwtConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtConfig {
    pub fn new(jwt_secret: Secret<String>) -> Self {
        Self {
            jwt_secret,
            token_ttl_in_seconds: TOKEN_TTL_IN_SECONDS,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

/// Issues HS256 session tokens.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: JwtConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Check signature and expiry of a token issued with the same secret.
    ///
    /// No route consumes tokens yet; this is what a verification layer for
    /// protected routes would call.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenDecodeError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(TokenDecodeError::InvalidToken)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    #[tracing::instrument(name = "Issuing session token", skip_all)]
    fn issue(&self, claims: &SessionClaims) -> Result<SessionToken, TokenIssuerError> {
        let claims = Claims::new(claims, self.config.token_ttl_in_seconds)?;

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map(SessionToken)
        .map_err(|e| TokenIssuerError::Signing(e.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum TokenDecodeError {
    #[error("Invalid token: {0}")]
    InvalidToken(jsonwebtoken::errors::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: UserId,
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    fn new(session: &SessionClaims, ttl_in_seconds: i64) -> Result<Self, TokenIssuerError> {
        let delta = chrono::Duration::try_seconds(ttl_in_seconds).ok_or(
            TokenIssuerError::Unexpected("Failed to create token duration".to_string()),
        )?;

        let now = Utc::now();
        let exp = now
            .checked_add_signed(delta)
            .ok_or(TokenIssuerError::Unexpected(
                "Duration out of range".to_string(),
            ))?
            .timestamp();

        let iat: usize = now
            .timestamp()
            .try_into()
            .map_err(|_| TokenIssuerError::Unexpected("Failed to cast i64 to usize".to_string()))?;
        let exp: usize = exp
            .try_into()
            .map_err(|_| TokenIssuerError::Unexpected("Failed to cast i64 to usize".to_string()))?;

        Ok(Self {
            id: session.id.clone(),
            username: session.username.to_string(),
            iat,
            exp,
        })
    }
}

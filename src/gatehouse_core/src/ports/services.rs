use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    password::{Password, PasswordDigest},
    session::{SessionClaims, SessionToken},
};

// CredentialHasher port trait and errors
#[derive(Debug, Error)]
pub enum CredentialHasherError {
    #[error("Malformed password digest: {0}")]
    MalformedDigest(String),
    #[error("Password hashing failed: {0}")]
    Unexpected(String),
}

#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, CredentialHasherError>;

    /// A mismatch is `Ok(false)`; errors are reserved for unreadable digests
    /// and failures of the hashing machinery itself.
    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, CredentialHasherError>;
}

// TokenIssuer port trait and errors
#[derive(Debug, Error)]
pub enum TokenIssuerError {
    #[error("Failed to sign token: {0}")]
    Signing(String),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub trait TokenIssuer: Send + Sync {
    fn issue(&self, claims: &SessionClaims) -> Result<SessionToken, TokenIssuerError>;
}

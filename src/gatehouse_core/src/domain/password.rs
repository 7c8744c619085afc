use secrecy::{ExposeSecret, Secret};

use super::credentials::CredentialsError;

/// Plaintext password as received from the client.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(raw: Secret<String>) -> Result<Self, CredentialsError> {
        if raw.expose_secret().is_empty() {
            return Err(CredentialsError::MissingCredentials);
        }
        Ok(Self(raw))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = CredentialsError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// One-way digest of a password, in PHC string format.
#[derive(Debug, Clone)]
pub struct PasswordDigest(Secret<String>);

impl PasswordDigest {
    pub fn new(digest: Secret<String>) -> Self {
        Self(digest)
    }
}

impl AsRef<Secret<String>> for PasswordDigest {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl From<String> for PasswordDigest {
    fn from(digest: String) -> Self {
        Self(Secret::new(digest))
    }
}

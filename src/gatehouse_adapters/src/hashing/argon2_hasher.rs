use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use gatehouse_core::{CredentialHasher, CredentialHasherError, Password, PasswordDigest};
use secrecy::{ExposeSecret, Secret};

// Argon2id cost: memory in KiB, iterations, parallelism
const MEMORY_COST_KIB: u32 = 15000;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;

// Digests written by the earlier service are bcrypt, not PHC
const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Argon2id password hasher.
///
/// Both hashing and verification are CPU-bound, so they run on the blocking
/// pool rather than on the async executor. New digests are always Argon2id;
/// verification also accepts legacy bcrypt digests.
#[derive(Debug, Clone, Copy)]
pub struct Argon2Hasher {
    memory_cost_kib: u32,
    time_cost: u32,
    parallelism: u32,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self {
            memory_cost_kib: MEMORY_COST_KIB,
            time_cost: TIME_COST,
            parallelism: PARALLELISM,
        }
    }

    fn argon2(&self) -> Result<Argon2<'static>, CredentialHasherError> {
        let params = Params::new(self.memory_cost_kib, self.time_cost, self.parallelism, None)
            .map_err(|e| CredentialHasherError::Unexpected(e.to_string()))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CredentialHasher for Argon2Hasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, CredentialHasherError> {
        let hasher = self.argon2()?;
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt = SaltString::generate(rand_core::OsRng);
                hasher
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordDigest::new(Secret::new(h.to_string())))
                    .map_err(|e| CredentialHasherError::Unexpected(e.to_string()))
            })
        })
        .await
        .map_err(|e| CredentialHasherError::Unexpected(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, CredentialHasherError> {
        let verifier = self.argon2()?;
        let password = password.clone();
        let digest = digest.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let digest = digest.as_ref().expose_secret();
                if is_bcrypt(digest) {
                    return verify_bcrypt(&password, digest);
                }

                let expected = PasswordHash::new(digest)
                    .map_err(|e| CredentialHasherError::MalformedDigest(e.to_string()))?;

                match verifier
                    .verify_password(password.as_ref().expose_secret().as_bytes(), &expected)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(CredentialHasherError::Unexpected(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| CredentialHasherError::Unexpected(e.to_string()))?
    }
}

fn is_bcrypt(digest: &str) -> bool {
    BCRYPT_PREFIXES
        .iter()
        .any(|prefix| digest.starts_with(prefix))
}

fn verify_bcrypt(password: &Password, digest: &str) -> Result<bool, CredentialHasherError> {
    bcrypt::verify(password.as_ref().expose_secret(), digest)
        .map_err(|e| CredentialHasherError::MalformedDigest(e.to_string()))
}

use gatehouse_core::{
    CredentialHasher, CredentialHasherError, Password, SessionClaims, SessionToken, TokenIssuer,
    TokenIssuerError, UserDirectory, UserDirectoryError, Username,
};

/// Successful login: the signed token and the identity it carries
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: SessionToken,
    pub claims: SessionClaims,
}

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    UserDirectoryError(#[from] UserDirectoryError),
    #[error("{0}")]
    CredentialHasherError(#[from] CredentialHasherError),
    #[error("Invalid password")]
    IncorrectPassword,
    #[error("{0}")]
    TokenIssuerError(#[from] TokenIssuerError),
}

/// Login use case - verifies credentials and issues a session token
pub struct LoginUseCase<'a, D, H, T>
where
    D: UserDirectory,
    H: CredentialHasher,
    T: TokenIssuer,
{
    user_directory: &'a D,
    hasher: &'a H,
    token_issuer: &'a T,
}

impl<'a, D, H, T> LoginUseCase<'a, D, H, T>
where
    D: UserDirectory,
    H: CredentialHasher,
    T: TokenIssuer,
{
    pub fn new(user_directory: &'a D, hasher: &'a H, token_issuer: &'a T) -> Self {
        Self {
            user_directory,
            hasher,
            token_issuer,
        }
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// The issued token, or `UserNotFound` / `IncorrectPassword` when the
    /// credentials don't match a stored user
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: Username,
        password: Password,
    ) -> Result<LoginOutcome, LoginError> {
        let user = self.user_directory.find_by_username(&username).await?;

        if !self
            .hasher
            .verify(&password, user.password_digest())
            .await?
        {
            return Err(LoginError::IncorrectPassword);
        }

        let claims = SessionClaims {
            id: user.id().clone(),
            username: user.username().clone(),
        };
        let token = self.token_issuer.issue(&claims)?;

        Ok(LoginOutcome { token, claims })
    }
}

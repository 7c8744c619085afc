use gatehouse_core::{
    CredentialHasher, CredentialHasherError, NewUser, Password, User, UserDirectory,
    UserDirectoryError, Username,
};

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("{0}")]
    UserDirectoryError(#[from] UserDirectoryError),
    #[error("{0}")]
    CredentialHasherError(#[from] CredentialHasherError),
}

/// Register use case - creates a user record with a hashed password
pub struct RegisterUseCase<'a, D, H>
where
    D: UserDirectory,
    H: CredentialHasher,
{
    user_directory: &'a D,
    hasher: &'a H,
}

impl<'a, D, H> RegisterUseCase<'a, D, H>
where
    D: UserDirectory,
    H: CredentialHasher,
{
    pub fn new(user_directory: &'a D, hasher: &'a H) -> Self {
        Self {
            user_directory,
            hasher,
        }
    }

    /// Execute the register use case
    ///
    /// There is no lookup before the insert: the directory's uniqueness
    /// constraint decides, and `UsernameTaken` from `insert` is final.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: Username,
        password: Password,
    ) -> Result<User, RegisterError> {
        let password_digest = self.hasher.hash(&password).await?;

        let user = self
            .user_directory
            .insert(NewUser::new(username, password_digest))
            .await?;

        Ok(user)
    }
}

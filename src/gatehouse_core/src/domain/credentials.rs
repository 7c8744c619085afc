use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Username and password are required")]
    MissingCredentials,
}

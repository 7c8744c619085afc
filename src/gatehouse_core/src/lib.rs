pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    credentials::CredentialsError,
    password::{Password, PasswordDigest},
    session::{SessionClaims, SessionToken},
    user::{NewUser, User, UserId},
    username::Username,
};

pub use ports::{
    repositories::{UserDirectory, UserDirectoryError},
    services::{CredentialHasher, CredentialHasherError, TokenIssuer, TokenIssuerError},
};

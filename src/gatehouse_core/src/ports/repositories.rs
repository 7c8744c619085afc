use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    user::{NewUser, User},
    username::Username,
};

// UserDirectory port trait and errors
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    #[error("User not found")]
    UserNotFound,
    #[error("Username already exists")]
    UsernameTaken,
    #[error("{0}")]
    Unexpected(String),
}

impl PartialEq for UserDirectoryError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserNotFound, Self::UserNotFound)
                | (Self::UsernameTaken, Self::UsernameTaken)
                | (Self::Unexpected(_), Self::Unexpected(_))
        )
    }
}

/// Store that owns user records.
///
/// Implementations must make `insert` atomic with respect to username
/// uniqueness and report a clash as [`UserDirectoryError::UsernameTaken`].
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Exact-match lookup. No row is [`UserDirectoryError::UserNotFound`].
    async fn find_by_username(&self, username: &Username) -> Result<User, UserDirectoryError>;

    async fn insert(&self, user: NewUser) -> Result<User, UserDirectoryError>;
}

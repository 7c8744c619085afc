use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{password::PasswordDigest, username::Username};

/// Identifier assigned by the user directory.
///
/// The store decides the representation; integers and strings are both kept
/// as-is so they round-trip to clients unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// A user record as held by the directory.
///
/// `created_at` is only known when the directory reports it; lookups for login
/// don't fetch it.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    username: Username,
    password_digest: PasswordDigest,
    created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(
        id: UserId,
        username: Username,
        password_digest: PasswordDigest,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            username,
            password_digest,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

/// Insert payload for the directory. The id and creation time are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    username: Username,
    password_digest: PasswordDigest,
}

impl NewUser {
    pub fn new(username: Username, password_digest: PasswordDigest) -> Self {
        Self {
            username,
            password_digest,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }

    pub fn into_user(self, id: UserId, created_at: Option<DateTime<Utc>>) -> User {
        User::new(id, self.username, self.password_digest, created_at)
    }
}

use super::{user::UserId, username::Username};

/// Identity carried by an issued session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub id: UserId,
    pub username: Username,
}

/// Signed bearer token handed back to the client after login.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for SessionToken {
    fn from(s: String) -> Self {
        SessionToken(s)
    }
}

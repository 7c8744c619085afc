use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use gatehouse_core::{NewUser, User, UserDirectory, UserDirectoryError, UserId, Username};

#[derive(Default, Clone)]
pub struct HashMapUserDirectory {
    users: Arc<RwLock<HashMap<Username, User>>>,
}

impl HashMapUserDirectory {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserDirectory for HashMapUserDirectory {
    async fn find_by_username(&self, username: &Username) -> Result<User, UserDirectoryError> {
        let users = self.users.read().await;
        users
            .get(username)
            .cloned()
            .ok_or(UserDirectoryError::UserNotFound)
    }

    async fn insert(&self, user: NewUser) -> Result<User, UserDirectoryError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.username()) {
            return Err(UserDirectoryError::UsernameTaken);
        }

        let user = user.into_user(UserId::Text(Uuid::new_v4().to_string()), Some(Utc::now()));
        users.insert(user.username().clone(), user.clone());
        Ok(user)
    }
}

use axum::{
    Json, extract::rejection::JsonRejection, extract::State, http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use gatehouse_application::RegisterUseCase;
use gatehouse_core::{CredentialHasher, User, UserDirectory, UserId};
use serde::{Deserialize, Serialize};

use super::{CredentialsRequest, error::AuthApiError, parse_credentials};

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: RegisteredUser,
}

/// Public view of a new user. The password digest never leaves the server.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: UserId,
    pub username: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id().clone(),
            username: user.username().to_string(),
            created_at: user.created_at(),
        }
    }
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<D, H>(
    State((user_directory, hasher)): State<(D, H)>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    D: UserDirectory + Clone + 'static,
    H: CredentialHasher + Clone + 'static,
{
    let (username, password) = parse_credentials(payload)?;

    let use_case = RegisterUseCase::new(&user_directory, &hasher);
    let user = use_case.execute(username, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful".to_string(),
            user: user.into(),
        }),
    ))
}

use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};
use gatehouse_application::LoginUseCase;
use gatehouse_core::{CredentialHasher, TokenIssuer, UserDirectory, UserId};
use serde::{Deserialize, Serialize};

use super::{CredentialsRequest, error::AuthApiError, parse_credentials};

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoggedInUser,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoggedInUser {
    pub id: UserId,
    pub username: String,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<D, H, T>(
    State((user_directory, hasher, token_issuer)): State<(D, H, T)>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    D: UserDirectory + Clone + 'static,
    H: CredentialHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let (username, password) = parse_credentials(payload)?;

    let use_case = LoginUseCase::new(&user_directory, &hasher, &token_issuer);
    let outcome = use_case.execute(username, password).await?;

    Ok(Json(LoginResponse {
        token: outcome.token.into_string(),
        user: LoggedInUser {
            id: outcome.claims.id,
            username: outcome.claims.username.into(),
        },
    }))
}

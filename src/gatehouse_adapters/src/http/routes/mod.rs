pub mod error;
pub mod health;
pub mod login;
pub mod register;

pub use error::{AuthApiError, ErrorResponse};
pub use health::{health, test_endpoint};
pub use login::login;
pub use register::register;

use axum::{Json, extract::rejection::JsonRejection};
use gatehouse_core::{Password, Username};
use secrecy::Secret;
use serde::Deserialize;

/// Body shared by `/register` and `/login`.
///
/// Both fields are optional at the serde level so a missing field reaches the
/// handler and gets the same 400 as an empty one.
#[derive(Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

impl CredentialsRequest {
    fn parse(self) -> Result<(Username, Password), AuthApiError> {
        let (Some(username), Some(password)) = (self.username, self.password) else {
            return Err(AuthApiError::MissingCredentials);
        };

        Ok((Username::parse(username)?, Password::try_from(password)?))
    }
}

fn parse_credentials(
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(Username, Password), AuthApiError> {
    let Json(request) = payload?;
    request.parse()
}

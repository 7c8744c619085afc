use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gatehouse_application::{LoginError, RegisterError};
use gatehouse_core::{CredentialHasherError, CredentialsError, TokenIssuerError, UserDirectoryError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Username already exists")]
    UsernameTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid password")]
    IncorrectPassword,

    #[error("Internal server error: {0}")]
    UnexpectedError(String),

    // Login failures keep the detail out of the response body
    #[error("Internal server error")]
    OpaqueError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            AuthApiError::MissingCredentials | AuthApiError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }

            // A duplicate username is reported as 400, not 409; clients
            // already branch on 400 for it.
            AuthApiError::UsernameTaken => StatusCode::BAD_REQUEST,

            // Same status for both so only the message tells them apart
            AuthApiError::UserNotFound | AuthApiError::IncorrectPassword => {
                StatusCode::BAD_REQUEST
            }

            AuthApiError::UnexpectedError(ref e) | AuthApiError::OpaqueError(ref e) => {
                tracing::error!(error = %e, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<JsonRejection> for AuthApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // No JSON body at all reads the same as one without credentials
            JsonRejection::MissingJsonContentType(_) => AuthApiError::MissingCredentials,
            other => AuthApiError::MalformedBody(other.body_text()),
        }
    }
}

impl From<CredentialsError> for AuthApiError {
    fn from(error: CredentialsError) -> Self {
        match error {
            CredentialsError::MissingCredentials => AuthApiError::MissingCredentials,
        }
    }
}

impl From<UserDirectoryError> for AuthApiError {
    fn from(error: UserDirectoryError) -> Self {
        match error {
            UserDirectoryError::UsernameTaken => AuthApiError::UsernameTaken,
            UserDirectoryError::UserNotFound => AuthApiError::UserNotFound,
            UserDirectoryError::Unexpected(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<CredentialHasherError> for AuthApiError {
    fn from(error: CredentialHasherError) -> Self {
        AuthApiError::UnexpectedError(error.to_string())
    }
}

impl From<TokenIssuerError> for AuthApiError {
    fn from(error: TokenIssuerError) -> Self {
        AuthApiError::UnexpectedError(error.to_string())
    }
}

impl From<RegisterError> for AuthApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::UserDirectoryError(e) => e.into(),
            RegisterError::CredentialHasherError(e) => e.into(),
        }
    }
}

impl From<LoginError> for AuthApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::UserDirectoryError(UserDirectoryError::Unexpected(e)) => {
                AuthApiError::OpaqueError(e)
            }
            LoginError::UserDirectoryError(e) => e.into(),
            LoginError::CredentialHasherError(e) => AuthApiError::OpaqueError(e.to_string()),
            LoginError::IncorrectPassword => AuthApiError::IncorrectPassword,
            LoginError::TokenIssuerError(e) => AuthApiError::OpaqueError(e.to_string()),
        }
    }
}

use accounts_application::AccountError;
use accounts_core::UserError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Password does not match")]
    PasswordMismatch,

    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("User not authenticated")]
    Unauthenticated,

    #[error("User not found")]
    UserNotFound,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::PasswordMismatch => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UsernameAlreadyExists | ApiError::EmailAlreadyExists => StatusCode::CONFLICT,
            ApiError::InvalidCredentials | ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let error = match self {
            ApiError::UnexpectedError(detail) => {
                tracing::error!(%detail, "request failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status_code, Json(ErrorResponse { error })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<AccountError> for ApiError {
    fn from(error: AccountError) -> Self {
        match error {
            AccountError::UserNotFound => ApiError::UserNotFound,
            AccountError::UsernameAlreadyExists => ApiError::UsernameAlreadyExists,
            AccountError::EmailAlreadyExists => ApiError::EmailAlreadyExists,
            AccountError::InvalidCredentials => ApiError::InvalidCredentials,
            AccountError::PasswordMismatch => ApiError::PasswordMismatch,
            AccountError::Unauthenticated => ApiError::Unauthenticated,
            AccountError::UserStoreError(e) => ApiError::UnexpectedError(e.to_string()),
            AccountError::PasswordHasherError(e) => ApiError::UnexpectedError(e.to_string()),
            AccountError::SessionTokenError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

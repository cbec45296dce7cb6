use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Missing or expired session")]
    InvalidSession,

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type AdminResult<T> = Result<T, AdminError>;

impl From<AdminError> for AppError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::InvalidCredentials => {
                AppError::Unauthorized("Invalid email or password".to_string())
            }
            AdminError::InvalidSession => {
                AppError::Unauthorized("Missing or expired session".to_string())
            }
            AdminError::PasswordHash(msg) => AppError::InternalServerError(msg),
            AdminError::Validation(msg) => AppError::BadRequest(msg),
            AdminError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for AdminError {
    fn from(err: mongodb::error::Error) -> Self {
        AdminError::Database(err.to_string())
    }
}

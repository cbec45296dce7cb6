use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutreachError {
    #[error("'{0}' is already subscribed")]
    AlreadySubscribed(String),

    #[error("'{0}' is not subscribed")]
    NotSubscribed(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type OutreachResult<T> = Result<T, OutreachError>;

impl From<OutreachError> for AppError {
    fn from(err: OutreachError) -> Self {
        match err {
            OutreachError::AlreadySubscribed(email) => {
                AppError::Conflict(format!("'{email}' is already subscribed"))
            }
            OutreachError::NotSubscribed(email) => {
                AppError::NotFound(format!("'{email}' is not subscribed"))
            }
            OutreachError::Validation(msg) => AppError::BadRequest(msg),
            OutreachError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for OutreachError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for OutreachError {
    fn from(err: mongodb::error::Error) -> Self {
        OutreachError::Database(err.to_string())
    }
}

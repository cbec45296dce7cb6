use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AchievementError {
    #[error("Achievement not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type AchievementResult<T> = Result<T, AchievementError>;

impl From<AchievementError> for AppError {
    fn from(err: AchievementError) -> Self {
        match err {
            AchievementError::NotFound(id) => {
                AppError::NotFound(format!("Achievement {id} not found"))
            }
            AchievementError::Validation(msg) => AppError::BadRequest(msg),
            AchievementError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for AchievementError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for AchievementError {
    fn from(err: mongodb::error::Error) -> Self {
        AchievementError::Database(err.to_string())
    }
}

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Blog post not found: {0}")]
    NotFound(Uuid),

    #[error("No published post with slug '{0}'")]
    SlugNotFound(String),

    #[error("A post with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type BlogResult<T> = Result<T, BlogError>;

impl From<BlogError> for AppError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::NotFound(id) => AppError::NotFound(format!("Blog post {id} not found")),
            BlogError::SlugNotFound(slug) => {
                AppError::NotFound(format!("No published post with slug '{slug}'"))
            }
            BlogError::DuplicateSlug(slug) => {
                AppError::Conflict(format!("A post with slug '{slug}' already exists"))
            }
            BlogError::Validation(msg) => AppError::BadRequest(msg),
            BlogError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for BlogError {
    fn from(err: mongodb::error::Error) -> Self {
        BlogError::Database(err.to_string())
    }
}

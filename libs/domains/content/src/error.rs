use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use locale::{Country, Language};
use thiserror::Error;
use uuid::Uuid;

use crate::models::ContentKey;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Page content not found: {0}")]
    NotFound(Uuid),

    #[error("No content for ({:?}, {:?}, {:?})", .0.country, .0.page_type, .0.language)]
    NotFoundForKey(ContentKey),

    #[error("Content already exists for ({:?}, {:?}, {:?})", .0.country, .0.page_type, .0.language)]
    DuplicateKey(ContentKey),

    #[error("Language {language} is not offered in {country}")]
    LanguageNotAllowed { country: Country, language: Language },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ContentResult<T> = Result<T, ContentError>;

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::NotFound(id) => {
                AppError::NotFound(format!("Page content {id} not found"))
            }
            ContentError::NotFoundForKey(_) => AppError::NotFound(err.to_string()),
            ContentError::DuplicateKey(_) => AppError::Conflict(err.to_string()),
            ContentError::LanguageNotAllowed { .. } => AppError::BadRequest(err.to_string()),
            ContentError::Validation(msg) => AppError::BadRequest(msg),
            ContentError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ContentError {
    fn from(err: mongodb::error::Error) -> Self {
        ContentError::Database(err.to_string())
    }
}

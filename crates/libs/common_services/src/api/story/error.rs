use crate::api::response::error_response;
use crate::database::DbError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),

    #[error("story not found")]
    NotFound,

    #[error("caller does not own this story")]
    NotOwner,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

fn log_error(error: &StoryError) {
    match error {
        StoryError::Database(e) => warn!("Database query failed: {}", e),
        StoryError::Internal(e) => warn!("Internal error: {:?}", e),
        other => warn!("Story request rejected: {}", other),
    }
}

impl IntoResponse for StoryError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, code, message) = match &self {
            Self::Database(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "An unexpected internal error occurred.".to_owned(),
            ),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                "STORY_NOT_FOUND",
                "Story does not exist.".to_owned(),
            ),
            Self::NotOwner => (
                StatusCode::FORBIDDEN,
                "STORY_NOT_OWNER",
                "You do not own this story.".to_owned(),
            ),
            Self::UserNotFound => (
                StatusCode::NOT_FOUND,
                "USER_NOT_FOUND",
                "User does not exist.".to_owned(),
            ),
            Self::InvalidInput(message) => (
                StatusCode::BAD_REQUEST,
                "INVALID_INPUT_VALUE",
                message.clone(),
            ),
        };

        error_response(status, code, &message)
    }
}

impl From<DbError> for StoryError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(sqlx::Error::RowNotFound) => Self::NotFound,
            DbError::UniqueViolation(sql_err) | DbError::Sqlx(sql_err) => Self::Database(sql_err),
        }
    }
}

use crate::api::response::error_response;
use crate::database::DbError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum CommentError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),

    #[error("comment not found")]
    NotFound,

    #[error("post not found")]
    PostNotFound,

    #[error("author not found")]
    UserNotFound,

    #[error("caller is not the owner")]
    AccessDenied,

    #[error("content is blank")]
    EmptyContent,
}

fn log_error(error: &CommentError) {
    match error {
        CommentError::Database(e) => warn!("Database query failed: {}", e),
        CommentError::Internal(e) => warn!("Internal error: {:?}", e),
        other => warn!("Comment request rejected: {}", other),
    }
}

impl IntoResponse for CommentError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, code, message) = match &self {
            Self::Database(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "An unexpected internal error occurred.",
            ),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                "COMMENT_NOT_FOUND",
                "Comment does not exist.",
            ),
            Self::PostNotFound => (
                StatusCode::NOT_FOUND,
                "POST_NOT_FOUND",
                "Post does not exist.",
            ),
            Self::UserNotFound => (
                StatusCode::NOT_FOUND,
                "USER_NOT_FOUND",
                "User does not exist.",
            ),
            Self::AccessDenied => (
                StatusCode::FORBIDDEN,
                "ACCESS_DENIED",
                "You do not have permission for this resource.",
            ),
            Self::EmptyContent => (
                StatusCode::BAD_REQUEST,
                "EMPTY_CONTENT",
                "Content cannot be blank.",
            ),
        };

        error_response(status, code, message)
    }
}

impl From<DbError> for CommentError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(sqlx::Error::RowNotFound) => Self::NotFound,
            DbError::UniqueViolation(sql_err) | DbError::Sqlx(sql_err) => Self::Database(sql_err),
        }
    }
}

use crate::api::response::error_response;
use crate::database::DbError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum FollowError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),

    #[error("user not found")]
    UserNotFound,

    #[error("cannot follow yourself")]
    SelfFollowNotAllowed,
}

fn log_error(error: &FollowError) {
    match error {
        FollowError::Database(e) => warn!("Database query failed: {}", e),
        FollowError::Internal(e) => warn!("Internal error: {:?}", e),
        other => warn!("Follow request rejected: {}", other),
    }
}

impl IntoResponse for FollowError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, code, message) = match &self {
            Self::Database(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "An unexpected internal error occurred.",
            ),
            Self::UserNotFound => (
                StatusCode::NOT_FOUND,
                "USER_NOT_FOUND",
                "User does not exist.",
            ),
            Self::SelfFollowNotAllowed => (
                StatusCode::BAD_REQUEST,
                "SELF_FOLLOW_NOT_ALLOWED",
                "You cannot follow yourself.",
            ),
        };

        error_response(status, code, message)
    }
}

impl From<DbError> for FollowError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation(sql_err) | DbError::Sqlx(sql_err) => Self::Database(sql_err),
        }
    }
}

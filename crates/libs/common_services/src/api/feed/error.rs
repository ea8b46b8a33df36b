use crate::api::response::error_response;
use crate::database::DbError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),

    #[error("author not found")]
    UserNotFound,
}

fn log_error(error: &FeedError) {
    match error {
        FeedError::Database(e) => warn!("Database query failed: {}", e),
        FeedError::Internal(e) => warn!("Internal error: {:?}", e),
        FeedError::UserNotFound => warn!("Feed enrichment hit a missing author"),
    }
}

impl IntoResponse for FeedError {
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
        };

        error_response(status, code, message)
    }
}

impl From<DbError> for FeedError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation(sql_err) | DbError::Sqlx(sql_err) => Self::Database(sql_err),
        }
    }
}

use crate::api::response::error_response;
use crate::database::DbError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),

    #[error("user not found")]
    NotFound,

    #[error("nickname already registered")]
    NicknameAlreadyExists,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

fn log_error(error: &UserError) {
    match error {
        UserError::Database(e) => warn!("Database query failed: {}", e),
        UserError::Internal(e) => warn!("Internal error: {:?}", e),
        other => warn!("User request rejected: {}", other),
    }
}

impl IntoResponse for UserError {
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
                "USER_NOT_FOUND",
                "User does not exist.".to_owned(),
            ),
            Self::NicknameAlreadyExists => (
                StatusCode::CONFLICT,
                "NICKNAME_ALREADY_EXISTS",
                "Nickname is already registered.".to_owned(),
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

impl From<DbError> for UserError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation(_) => Self::NicknameAlreadyExists,
            DbError::Sqlx(sqlx::Error::RowNotFound) => Self::NotFound,
            DbError::Sqlx(sql_err) => Self::Database(sql_err),
        }
    }
}

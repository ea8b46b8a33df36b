use crate::api::response::error_response;
use crate::database::DbError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),

    #[error("user not found")]
    UserNotFound,

    #[error("invalid password")]
    InvalidPassword,

    #[error("email already registered")]
    EmailAlreadyExists,

    #[error("nickname already registered")]
    NicknameAlreadyExists,

    #[error("invalid refresh token")]
    InvalidRefreshToken,

    #[error("refresh token expired")]
    RefreshTokenExpired,

    #[error("refresh token reuse detected")]
    RefreshTokenReuseDetected,

    #[error("missing or invalid credentials")]
    Unauthenticated,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

fn log_error(error: &AuthError) {
    match error {
        AuthError::Database(e) => warn!("Database query failed: {}", e),
        AuthError::Internal(e) => warn!("Internal error: {:?}", e),
        AuthError::RefreshTokenReuseDetected => {
            warn!("Refresh token reuse detected, revoking session");
        }
        other => warn!("Auth rejected: {}", other),
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, code, message) = match &self {
            Self::Database(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "An unexpected internal error occurred.".to_owned(),
            ),
            Self::UserNotFound => (
                StatusCode::NOT_FOUND,
                "USER_NOT_FOUND",
                "User does not exist.".to_owned(),
            ),
            Self::InvalidPassword => (
                StatusCode::UNAUTHORIZED,
                "INVALID_PASSWORD",
                "Password does not match.".to_owned(),
            ),
            Self::EmailAlreadyExists => (
                StatusCode::CONFLICT,
                "EMAIL_ALREADY_EXISTS",
                "Email is already registered.".to_owned(),
            ),
            Self::NicknameAlreadyExists => (
                StatusCode::CONFLICT,
                "NICKNAME_ALREADY_EXISTS",
                "Nickname is already registered.".to_owned(),
            ),
            Self::InvalidRefreshToken => (
                StatusCode::UNAUTHORIZED,
                "INVALID_REFRESH_TOKEN",
                "Refresh token is not valid.".to_owned(),
            ),
            Self::RefreshTokenExpired => (
                StatusCode::UNAUTHORIZED,
                "REFRESH_TOKEN_EXPIRED",
                "Refresh token has expired.".to_owned(),
            ),
            Self::RefreshTokenReuseDetected => (
                StatusCode::UNAUTHORIZED,
                "REFRESH_TOKEN_REUSE_DETECTED",
                "Refresh token was already used.".to_owned(),
            ),
            Self::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "Authentication is required.".to_owned(),
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

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::Internal(eyre::Report::new(err))
    }
}

impl From<DbError> for AuthError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation(sql_err) | DbError::Sqlx(sql_err) => Self::Database(sql_err),
        }
    }
}

use crate::api::response::error_response;
use crate::database::DbError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum AlbumError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),

    #[error("album not found")]
    NotFound,

    #[error("album title already used by this owner")]
    AlreadyExists,

    #[error("post not found")]
    PostNotFound,

    #[error("post is not in this album")]
    PostNotInAlbum,

    #[error("caller is not the owner")]
    AccessDenied,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

fn log_error(error: &AlbumError) {
    match error {
        AlbumError::Database(e) => warn!("Database query failed: {}", e),
        AlbumError::Internal(e) => warn!("Internal error: {:?}", e),
        other => warn!("Album request rejected: {}", other),
    }
}

impl IntoResponse for AlbumError {
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
                "ALBUM_NOT_FOUND",
                "Album does not exist.".to_owned(),
            ),
            Self::AlreadyExists => (
                StatusCode::CONFLICT,
                "ALBUM_ALREADY_EXISTS",
                "An album with this title already exists.".to_owned(),
            ),
            Self::PostNotFound => (
                StatusCode::NOT_FOUND,
                "POST_NOT_FOUND",
                "Post does not exist.".to_owned(),
            ),
            Self::PostNotInAlbum => (
                StatusCode::BAD_REQUEST,
                "POST_NOT_IN_ALBUM",
                "Post is not in this album.".to_owned(),
            ),
            Self::AccessDenied => (
                StatusCode::FORBIDDEN,
                "ACCESS_DENIED",
                "You do not have permission for this resource.".to_owned(),
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

impl From<DbError> for AlbumError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation(_) => Self::AlreadyExists,
            DbError::Sqlx(sqlx::Error::RowNotFound) => Self::NotFound,
            DbError::Sqlx(sql_err) => Self::Database(sql_err),
        }
    }
}

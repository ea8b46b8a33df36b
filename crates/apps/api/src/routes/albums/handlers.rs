use crate::api_state::ApiContext;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use common_services::api::album::error::AlbumError;
use common_services::api::album::interfaces::{
    AlbumDetailResponse, AlbumListResponse, AlbumResponse, AlbumTitleRequest,
};
use common_services::api::album::service;
use common_services::api::response::ApiResponse;
use common_services::database::app_user::User;
use tracing::instrument;

#[instrument(skip(context, user, payload), err(Debug))]
pub async fn create_album_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Json(payload): Json<AlbumTitleRequest>,
) -> Result<Json<ApiResponse<AlbumResponse>>, AlbumError> {
    let album = service::create(&context.pool, user.id, &payload.title).await?;
    Ok(Json(ApiResponse::ok(album)))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn my_albums_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
) -> Result<Json<ApiResponse<AlbumListResponse>>, AlbumError> {
    let albums = service::list_mine(&context.pool, user.id).await?;
    Ok(Json(ApiResponse::ok(albums)))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn album_detail_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(album_id): Path<i64>,
) -> Result<Json<ApiResponse<AlbumDetailResponse>>, AlbumError> {
    let detail = service::detail(&context.pool, user.id, album_id).await?;
    Ok(Json(ApiResponse::ok(detail)))
}

#[instrument(skip(context, user, payload), err(Debug))]
pub async fn update_album_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(album_id): Path<i64>,
    Json(payload): Json<AlbumTitleRequest>,
) -> Result<Json<ApiResponse<()>>, AlbumError> {
    service::update_title(&context.pool, user.id, album_id, &payload.title).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn delete_album_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(album_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AlbumError> {
    service::delete(&context.pool, user.id, album_id).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn add_album_post_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path((album_id, post_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<()>>, AlbumError> {
    service::add_post(&context.pool, user.id, album_id, post_id).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn remove_album_post_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path((album_id, post_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<()>>, AlbumError> {
    service::remove_post(&context.pool, user.id, album_id, post_id).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

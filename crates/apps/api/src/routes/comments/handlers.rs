use crate::api_state::ApiContext;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use common_services::api::comment::error::CommentError;
use common_services::api::comment::interfaces::{CommentContentRequest, CommentResponse};
use common_services::api::comment::service;
use common_services::api::response::ApiResponse;
use common_services::database::app_user::User;
use tracing::instrument;

#[instrument(skip(context, user, payload), err(Debug))]
pub async fn create_comment_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(post_id): Path<i64>,
    Json(payload): Json<CommentContentRequest>,
) -> Result<Json<ApiResponse<CommentResponse>>, CommentError> {
    let comment = service::create(&context.pool, user.id, post_id, &payload.content).await?;
    Ok(Json(ApiResponse::ok(comment)))
}

#[instrument(skip(context), err(Debug))]
pub async fn list_comments_handler(
    State(context): State<ApiContext>,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<CommentResponse>>>, CommentError> {
    let comments = service::list(&context.pool, post_id).await?;
    Ok(Json(ApiResponse::ok(comments)))
}

#[instrument(skip(context, user, payload), err(Debug))]
pub async fn update_comment_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path((_post_id, comment_id)): Path<(i64, i64)>,
    Json(payload): Json<CommentContentRequest>,
) -> Result<Json<ApiResponse<CommentResponse>>, CommentError> {
    let comment = service::update(&context.pool, user.id, comment_id, &payload.content).await?;
    Ok(Json(ApiResponse::ok(comment)))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn delete_comment_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path((_post_id, comment_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<()>>, CommentError> {
    service::delete(&context.pool, user.id, comment_id).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

use crate::api_state::ApiContext;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use common_services::api::post::error::PostError;
use common_services::api::post::interfaces::{CreatePostRequest, PostResponse, UpdatePostRequest};
use common_services::api::post::service;
use common_services::api::response::ApiResponse;
use common_services::database::app_user::User;
use tracing::instrument;

#[instrument(skip(context, user, payload), err(Debug))]
pub async fn create_post_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<Json<ApiResponse<PostResponse>>, PostError> {
    let post = service::create(&context.pool, user.id, payload).await?;
    Ok(Json(ApiResponse::ok(post)))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn get_post_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<PostResponse>>, PostError> {
    let post = service::get(&context.pool, post_id, Some(user.id)).await?;
    Ok(Json(ApiResponse::ok(post)))
}

/// Browse endpoint. Works without credentials; a valid token fills in
/// the viewer's liked/bookmarked flags.
#[instrument(skip(context, user), err(Debug))]
pub async fn search_posts_handler(
    State(context): State<ApiContext>,
    user: Option<Extension<User>>,
) -> Result<Json<ApiResponse<Vec<PostResponse>>>, PostError> {
    let viewer_id = user.map(|Extension(user)| user.id);
    let posts = service::search(&context.pool, viewer_id).await?;
    Ok(Json(ApiResponse::ok(posts)))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn bookmarked_posts_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
) -> Result<Json<ApiResponse<Vec<PostResponse>>>, PostError> {
    let posts = service::bookmarked(&context.pool, user.id).await?;
    Ok(Json(ApiResponse::ok(posts)))
}

#[instrument(skip(context, user, payload), err(Debug))]
pub async fn update_post_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(post_id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<ApiResponse<PostResponse>>, PostError> {
    let post = service::update(&context.pool, user.id, post_id, payload).await?;
    Ok(Json(ApiResponse::ok(post)))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn delete_post_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, PostError> {
    service::delete(&context.pool, user.id, post_id).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn like_post_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, PostError> {
    service::like(&context.pool, user.id, post_id).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn unlike_post_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, PostError> {
    service::unlike(&context.pool, user.id, post_id).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn bookmark_post_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, PostError> {
    service::bookmark(&context.pool, user.id, post_id).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn unbookmark_post_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, PostError> {
    service::unbookmark(&context.pool, user.id, post_id).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

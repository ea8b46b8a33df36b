use crate::api_state::ApiContext;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use common_services::api::follow::error::FollowError;
use common_services::api::follow::interfaces::{FollowListResponse, FollowToggleResponse};
use common_services::api::follow::service;
use common_services::api::response::ApiResponse;
use common_services::database::app_user::User;
use tracing::instrument;

#[instrument(skip(context, user), err(Debug))]
pub async fn toggle_follow_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(to_user_id): Path<i64>,
) -> Result<Json<ApiResponse<FollowToggleResponse>>, FollowError> {
    let result = service::toggle(&context.pool, user.id, to_user_id).await?;
    Ok(Json(ApiResponse::ok(result)))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn remove_follower_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(follower_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, FollowError> {
    service::remove_follower(&context.pool, user.id, follower_id).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn followers_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<FollowListResponse>>, FollowError> {
    let list = service::followers(&context.pool, user_id, user.id).await?;
    Ok(Json(ApiResponse::ok(list)))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn followings_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<FollowListResponse>>, FollowError> {
    let list = service::followings(&context.pool, user_id, user.id).await?;
    Ok(Json(ApiResponse::ok(list)))
}

use crate::api_state::ApiContext;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use common_services::api::response::ApiResponse;
use common_services::api::story::error::StoryError;
use common_services::api::story::interfaces::{
    CreateStoryRequest, StoryFeedResponse, StoryResponse, UserStoriesResponse,
};
use common_services::api::story::service;
use common_services::database::app_user::User;
use tracing::instrument;

#[instrument(skip(context, user, payload), err(Debug))]
pub async fn create_story_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateStoryRequest>,
) -> Result<Json<ApiResponse<StoryResponse>>, StoryError> {
    let story = service::create(&context.pool, user.id, &payload.image_url).await?;
    Ok(Json(ApiResponse::ok(story)))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn story_feed_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
) -> Result<Json<ApiResponse<StoryFeedResponse>>, StoryError> {
    let feed = service::feed(&context.pool, user.id).await?;
    Ok(Json(ApiResponse::ok(feed)))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn user_stories_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<UserStoriesResponse>>, StoryError> {
    let stories = service::user_stories(&context.pool, user.id, user_id).await?;
    Ok(Json(ApiResponse::ok(stories)))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn delete_story_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(story_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, StoryError> {
    service::delete(&context.pool, user.id, story_id).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

use crate::api_state::ApiContext;
use axum::extract::{Query, State};
use axum::{Extension, Json};
use common_services::api::feed::error::FeedError;
use common_services::api::feed::interfaces::{FeedParams, FeedResponse};
use common_services::api::feed::service::get_feed;
use common_services::api::response::ApiResponse;
use common_services::database::app_user::User;
use tracing::instrument;

#[instrument(skip(context, user), err(Debug))]
pub async fn feed_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Query(params): Query<FeedParams>,
) -> Result<Json<ApiResponse<FeedResponse>>, FeedError> {
    let page = get_feed(&context.pool, user.id, params).await?;
    Ok(Json(ApiResponse::ok(page)))
}

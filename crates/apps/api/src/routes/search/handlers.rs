use crate::api_state::ApiContext;
use axum::extract::State;
use axum::{Extension, Json};
use common_services::api::response::ApiResponse;
use common_services::api::search::error::SearchError;
use common_services::api::search::interfaces::{
    RecentSearchesResponse, SavedSearchResponse, SearchTargetRequest,
};
use common_services::api::search::service;
use common_services::database::app_user::User;
use tracing::instrument;

#[instrument(skip(context, user, payload), err(Debug))]
pub async fn save_search_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Json(payload): Json<SearchTargetRequest>,
) -> Result<Json<ApiResponse<SavedSearchResponse>>, SearchError> {
    let saved = service::save(&context.pool, user.id, payload.to_user_id).await?;
    Ok(Json(ApiResponse::ok(saved)))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn recent_searches_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
) -> Result<Json<ApiResponse<RecentSearchesResponse>>, SearchError> {
    let recent = service::recent(&context.pool, user.id).await?;
    Ok(Json(ApiResponse::ok(recent)))
}

#[instrument(skip(context, user, payload), err(Debug))]
pub async fn remove_search_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Json(payload): Json<SearchTargetRequest>,
) -> Result<Json<ApiResponse<()>>, SearchError> {
    service::remove(&context.pool, user.id, payload.to_user_id).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

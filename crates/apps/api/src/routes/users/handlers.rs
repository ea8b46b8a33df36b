use crate::api_state::ApiContext;
use crate::routes::auth::middlewares::common::extract_token;
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use common_services::api::auth::interfaces::AuthClaims;
use common_services::api::response::ApiResponse;
use common_services::api::user::error::UserError;
use common_services::api::user::interfaces::{
    ProfileResponse, SearchUsersParams, UpdateProfileRequest, UserSearchResponse,
};
use common_services::api::user::service::{delete_me, get_profile, search, update_me};
use common_services::database::app_user::User;
use http::HeaderMap;
use tracing::instrument;

#[instrument(skip(user))]
pub async fn me_handler(Extension(user): Extension<User>) -> Json<ApiResponse<User>> {
    Json(ApiResponse::ok(user))
}

#[instrument(skip(context, user, payload), err(Debug))]
pub async fn update_me_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<User>>, UserError> {
    let updated = update_me(&context.pool, user.id, payload).await?;
    Ok(Json(ApiResponse::ok(updated)))
}

#[instrument(skip(context, user, claims, headers), err(Debug))]
pub async fn delete_me_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Extension(claims): Extension<AuthClaims>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<()>>, UserError> {
    let token = extract_token(&headers)
        .map_err(|_| UserError::InvalidInput("Missing bearer token.".to_owned()))?;
    delete_me(&context.pool, &context.blacklist, user.id, &token, claims.exp).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

#[instrument(skip(context, user), err(Debug))]
pub async fn profile_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<ProfileResponse>>, UserError> {
    let profile = get_profile(&context.pool, user_id, user.id).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

#[instrument(skip(context), err(Debug))]
pub async fn search_users_handler(
    State(context): State<ApiContext>,
    Query(params): Query<SearchUsersParams>,
) -> Result<Json<ApiResponse<UserSearchResponse>>, UserError> {
    if params.q.trim().is_empty() {
        return Ok(Json(ApiResponse::ok(UserSearchResponse { users: vec![] })));
    }
    let results = search(&context.pool, params.q.trim()).await?;
    Ok(Json(ApiResponse::ok(results)))
}

//! HTTP handlers for registration and session management.

use crate::api_state::ApiContext;
use crate::routes::auth::middlewares::common::extract_token;
use axum::{Extension, Json, extract::State};
use common_services::api::auth::error::AuthError;
use common_services::api::auth::interfaces::{
    AuthClaims, LoginRequest, RefreshRequest, SignupRequest, TokenPair,
};
use common_services::api::auth::service::{login, logout, refresh, signup};
use common_services::api::response::ApiResponse;
use common_services::database::app_user::User;
use http::HeaderMap;
use tracing::instrument;

#[instrument(skip(context, payload), err(Debug))]
pub async fn register_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<ApiResponse<User>>, AuthError> {
    let user = signup(&context.pool, &payload).await?;
    Ok(Json(ApiResponse::ok(user)))
}

#[instrument(skip(context, payload), err(Debug))]
pub async fn login_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<TokenPair>>, AuthError> {
    let tokens = login(&context.pool, &context.settings.secrets.jwt, &payload).await?;
    Ok(Json(ApiResponse::ok(tokens)))
}

#[instrument(skip(context, payload), err(Debug))]
pub async fn refresh_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<TokenPair>>, AuthError> {
    let tokens = refresh(
        &context.pool,
        &context.settings.secrets.jwt,
        &payload.refresh_token,
    )
    .await?;
    Ok(Json(ApiResponse::ok(tokens)))
}

#[instrument(skip(context, headers, user, claims), err(Debug))]
pub async fn logout_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Extension(claims): Extension<AuthClaims>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<()>>, AuthError> {
    let token = extract_token(&headers)?;
    logout(&context.pool, &context.blacklist, user.id, &token, claims.exp).await?;
    Ok(Json(ApiResponse::ok_empty()))
}

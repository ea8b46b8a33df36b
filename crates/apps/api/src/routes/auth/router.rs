use crate::api_state::ApiContext;
use crate::routes::auth::handlers::{
    login_handler, logout_handler, refresh_handler, register_handler,
};
use app_state::RateLimitingSettings;
use axum::{Router, routing::post};
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tracing::info;

pub fn auth_public_router(rate_limiting: &RateLimitingSettings) -> Router<ApiContext> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(rate_limiting.req_per_second)
        .burst_size(rate_limiting.burst_size)
        .finish()
        .expect("Could not create rate-limiting governor.");

    info!(
        "Auth rate limits: {}/s, burst {}",
        rate_limiting.req_per_second, rate_limiting.burst_size
    );

    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/refresh", post(refresh_handler))
        .layer(GovernorLayer::new(governor_conf))
}

pub fn auth_protected_router() -> Router<ApiContext> {
    Router::new().route("/auth/logout", post(logout_handler))
}

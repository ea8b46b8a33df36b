use crate::api_state::ApiContext;
use crate::routes::feed::handlers::feed_handler;
use axum::{Router, routing::get};

pub fn feed_protected_router() -> Router<ApiContext> {
    Router::new().route("/feed", get(feed_handler))
}

use crate::api_state::ApiContext;
use crate::routes::follows::handlers::{
    followers_handler, followings_handler, remove_follower_handler, toggle_follow_handler,
};
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn follows_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/follows/{to_user_id}", post(toggle_follow_handler))
        .route("/follows/{user_id}/follower", get(followers_handler))
        .route("/follows/{user_id}/following", get(followings_handler))
        .route(
            "/follows/followers/{follower_id}",
            delete(remove_follower_handler),
        )
}

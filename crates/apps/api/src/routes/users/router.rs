use crate::api_state::ApiContext;
use crate::routes::users::handlers::{
    delete_me_handler, me_handler, profile_handler, search_users_handler, update_me_handler,
};
use axum::{
    Router,
    routing::{delete, get, patch},
};

pub fn users_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/users/me", get(me_handler))
        .route("/users/me", patch(update_me_handler))
        .route("/users/me", delete(delete_me_handler))
        .route("/users/search", get(search_users_handler))
        .route("/users/{user_id}", get(profile_handler))
}

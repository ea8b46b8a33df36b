use crate::api_state::ApiContext;
use crate::routes::stories::handlers::{
    create_story_handler, delete_story_handler, story_feed_handler, user_stories_handler,
};
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn stories_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/stories", post(create_story_handler))
        .route("/stories/feed", get(story_feed_handler))
        .route("/stories/user/{user_id}", get(user_stories_handler))
        .route("/stories/{story_id}", delete(delete_story_handler))
}

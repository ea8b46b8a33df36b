use crate::api_state::ApiContext;
use crate::routes::posts::handlers::{
    bookmark_post_handler, bookmarked_posts_handler, create_post_handler, delete_post_handler,
    get_post_handler, like_post_handler, search_posts_handler, unbookmark_post_handler,
    unlike_post_handler, update_post_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

pub fn posts_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/posts", post(create_post_handler))
        .route("/posts/bookmarks", get(bookmarked_posts_handler))
        .route(
            "/posts/{post_id}",
            get(get_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .route(
            "/posts/{post_id}/like",
            post(like_post_handler).delete(unlike_post_handler),
        )
        .route(
            "/posts/{post_id}/bookmark",
            post(bookmark_post_handler).delete(unbookmark_post_handler),
        )
}

pub fn posts_auth_optional_router() -> Router<ApiContext> {
    Router::new().route("/posts/search", get(search_posts_handler))
}

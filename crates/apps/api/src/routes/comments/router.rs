use crate::api_state::ApiContext;
use crate::routes::comments::handlers::{
    create_comment_handler, delete_comment_handler, list_comments_handler, update_comment_handler,
};
use axum::{
    Router,
    routing::{post, put},
};

pub fn comments_protected_router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/posts/{post_id}/comments",
            post(create_comment_handler).get(list_comments_handler),
        )
        .route(
            "/posts/{post_id}/comments/{comment_id}",
            put(update_comment_handler).delete(delete_comment_handler),
        )
}

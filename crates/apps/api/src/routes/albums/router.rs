use crate::api_state::ApiContext;
use crate::routes::albums::handlers::{
    add_album_post_handler, album_detail_handler, create_album_handler, delete_album_handler,
    my_albums_handler, remove_album_post_handler, update_album_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

pub fn albums_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/albums", post(create_album_handler))
        .route("/albums/my", get(my_albums_handler))
        .route(
            "/albums/{album_id}",
            get(album_detail_handler)
                .patch(update_album_handler)
                .delete(delete_album_handler),
        )
        .route(
            "/albums/{album_id}/posts/{post_id}",
            post(add_album_post_handler).delete(remove_album_post_handler),
        )
}

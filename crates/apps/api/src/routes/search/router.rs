use crate::api_state::ApiContext;
use crate::routes::search::handlers::{
    recent_searches_handler, remove_search_handler, save_search_handler,
};
use axum::{Router, routing::post};

pub fn search_protected_router() -> Router<ApiContext> {
    Router::new().route(
        "/search/recent",
        post(save_search_handler)
            .get(recent_searches_handler)
            .delete(remove_search_handler),
    )
}

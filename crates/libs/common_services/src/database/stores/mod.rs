pub mod album_store;
pub mod comment_store;
pub mod follow_store;
pub mod post_store;
pub mod refresh_token_store;
pub mod search_history_store;
pub mod story_store;
pub mod user_store;

pub mod album;
pub mod app_user;
pub mod comment;
pub mod follow;
pub mod post;
pub mod refresh_token;
pub mod search_history;
pub mod story;

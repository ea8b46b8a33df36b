pub mod album;
pub mod auth;
pub mod comment;
pub mod feed;
pub mod follow;
pub mod post;
pub mod response;
pub mod search;
pub mod story;
pub mod user;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, FromRow, Clone)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    /// Null means the post is in no album ("unassigned").
    pub album_id: Option<i64>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PostImage {
    pub id: i64,
    pub post_id: i64,
    pub image_url: String,
    pub sort_order: i32,
}

/// Like/comment counts plus the viewer's own flags for one post, computed
/// by existence checks at read time.
#[derive(Debug, FromRow, Clone, Copy, Default)]
pub struct PostEngagement {
    pub like_count: i64,
    pub comment_count: i64,
    pub liked: bool,
    pub bookmarked: bool,
}

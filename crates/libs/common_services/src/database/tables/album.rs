use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow, Clone)]
pub struct Album {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// An album listing row with its live post count and newest thumbnail.
#[derive(Debug, FromRow, Clone)]
pub struct AlbumSummaryRow {
    pub id: i64,
    pub title: String,
    pub post_count: i64,
    pub thumbnail_image_url: Option<String>,
}

/// One post inside an album detail view.
#[derive(Debug, FromRow, Clone)]
pub struct AlbumPostRow {
    pub post_id: i64,
    pub image_url: Option<String>,
    pub like_count: i64,
    pub comment_count: i64,
}

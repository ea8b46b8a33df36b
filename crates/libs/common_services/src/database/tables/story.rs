use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow, Clone)]
pub struct Story {
    pub id: i64,
    pub user_id: i64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// One author entry of the story-feed header strip.
#[derive(Debug, FromRow, Clone)]
pub struct StoryFeedRow {
    pub user_id: i64,
    pub nickname: String,
    pub profile_image_url: Option<String>,
    pub has_unseen: bool,
}

/// One active story of a single author, with its live view count.
#[derive(Debug, FromRow, Clone)]
pub struct StoryDetailRow {
    pub story_id: i64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub view_count: i64,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: String,
    pub album_id: Option<i64>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// `image_urls: None` leaves the current image set untouched.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub content: String,
    pub album_id: Option<i64>,
    pub image_urls: Option<Vec<String>>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostImageResponse {
    pub id: i64,
    pub url: String,
    pub order_index: i32,
}

/// A post enriched with its author snapshot and live engagement state.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub user_id: i64,
    pub nickname: String,
    pub profile_image_url: Option<String>,
    pub content: String,
    pub album_id: Option<i64>,
    pub images: Vec<PostImageResponse>,
    pub like_count: i64,
    pub comment_count: i64,
    pub is_liked: bool,
    pub is_bookmarked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

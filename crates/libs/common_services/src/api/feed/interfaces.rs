use app_state::constants;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FeedParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    constants().feed.default_page_size
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FeedAuthor {
    pub user_id: i64,
    pub nickname: String,
    pub profile_image_url: Option<String>,
}

/// One feed entry: the post reduced to its card form.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FeedPost {
    pub post_id: i64,
    pub author: FeedAuthor,
    pub thumbnail_image_url: Option<String>,
    pub like_count: i64,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
    pub liked: bool,
    pub bookmarked: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub items: Vec<FeedPost>,
    pub page: i64,
    pub size: i64,
    pub total_pages: i64,
    pub total_elements: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl FeedResponse {
    /// The page served when the caller follows nobody.
    #[must_use]
    pub fn empty(page: i64, size: i64) -> Self {
        Self {
            items: Vec::new(),
            page,
            size,
            total_pages: 0,
            total_elements: 0,
            has_next: false,
            has_prev: false,
        }
    }
}

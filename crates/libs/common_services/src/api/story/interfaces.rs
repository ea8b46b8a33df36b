use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoryRequest {
    pub image_url: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StoryResponse {
    pub story_id: i64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// One entry in the story-feed header strip.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StoryFeedEntry {
    pub user_id: i64,
    pub nickname: String,
    pub profile_image_url: Option<String>,
    pub has_unseen_story: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StoryFeedResponse {
    pub stories: Vec<StoryFeedEntry>,
}

/// `view_count` is populated only for the owner's own stories.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StoryDetail {
    pub story_id: i64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub view_count: Option<i64>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserStoriesResponse {
    pub user_id: i64,
    pub stories: Vec<StoryDetail>,
}

use serde::{Deserialize, Serialize};

/// Fields left out of the payload keep their current value.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub nickname: Option<String>,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchUsersParams {
    pub q: String,
}

/// A user's public profile with counts and viewer-relative flags.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: i64,
    pub nickname: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub post_count: i64,
    pub follower_count: i64,
    pub following_count: i64,
    pub is_me: bool,
    pub is_followed: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchEntry {
    pub user_id: i64,
    pub nickname: String,
    pub profile_image_url: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchResponse {
    pub users: Vec<UserSearchEntry>,
}

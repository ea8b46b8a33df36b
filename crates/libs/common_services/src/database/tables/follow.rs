use serde::Serialize;
use sqlx::FromRow;

/// One entry of a follower/following listing: the counterpart's public
/// profile plus whether the viewer follows that counterpart.
#[derive(Debug, Serialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FollowListEntry {
    pub user_id: i64,
    pub nickname: String,
    pub profile_image_url: Option<String>,
    pub is_following: bool,
}

use crate::database::follow::FollowListEntry;
use serde::Serialize;

/// Result of a follow toggle: the state after the request.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FollowToggleResponse {
    pub user_id: i64,
    pub is_following: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FollowListResponse {
    pub users: Vec<FollowListEntry>,
}

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchTargetRequest {
    pub to_user_id: i64,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearchResponse {
    pub search_id: i64,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecentSearchEntry {
    pub search_id: i64,
    pub user_id: i64,
    pub nickname: String,
    pub profile_image_url: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecentSearchesResponse {
    pub searches: Vec<RecentSearchEntry>,
}

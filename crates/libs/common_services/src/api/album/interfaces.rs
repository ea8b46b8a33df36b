use app_state::constants;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AlbumTitleRequest {
    pub title: String,
}

/// Which album a read refers to: a persisted row, or the derived
/// pseudo-album holding the owner's unassigned posts. The pseudo-album
/// is addressed by a sentinel id and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumSelector {
    Unassigned,
    Real(i64),
}

impl AlbumSelector {
    #[must_use]
    pub fn from_id(album_id: i64) -> Self {
        if album_id == constants().album.unassigned_album_id {
            Self::Unassigned
        } else {
            Self::Real(album_id)
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AlbumResponse {
    pub album_id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AlbumSummary {
    pub album_id: i64,
    pub title: String,
    pub post_count: i64,
    pub thumbnail_image_url: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AlbumListResponse {
    pub albums: Vec<AlbumSummary>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPostEntry {
    pub post_id: i64,
    pub image_url: Option<String>,
    pub like_count: i64,
    pub comment_count: i64,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDetailResponse {
    pub album_id: i64,
    pub title: String,
    pub posts: Vec<AlbumPostEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_id_selects_the_pseudo_album() {
        assert_eq!(AlbumSelector::from_id(-1), AlbumSelector::Unassigned);
        assert_eq!(AlbumSelector::from_id(7), AlbumSelector::Real(7));
    }
}

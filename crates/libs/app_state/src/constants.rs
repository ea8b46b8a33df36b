use serde::Deserialize;

/// Fixed tunables that are not expected to change per deployment.
///
/// All fields carry defaults so a missing `constants` section in the
/// settings file is fine.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConstants {
    pub auth: AuthConstants,
    pub feed: FeedConstants,
    pub story: StoryConstants,
    pub album: AlbumConstants,
    pub search: SearchConstants,
}

impl Default for AppConstants {
    fn default() -> Self {
        Self {
            auth: AuthConstants::default(),
            feed: FeedConstants::default(),
            story: StoryConstants::default(),
            album: AlbumConstants::default(),
            search: SearchConstants::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuthConstants {
    pub access_token_expiry_minutes: i64,
    pub refresh_token_expiry_days: i64,
}

impl Default for AuthConstants {
    fn default() -> Self {
        Self {
            access_token_expiry_minutes: 30,
            refresh_token_expiry_days: 14,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FeedConstants {
    pub default_page_size: i64,
}

impl Default for FeedConstants {
    fn default() -> Self {
        Self {
            default_page_size: 6,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoryConstants {
    /// A story is visible while `now - created_at` is under this many hours.
    pub active_window_hours: i64,
}

impl Default for StoryConstants {
    fn default() -> Self {
        Self {
            active_window_hours: 24,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AlbumConstants {
    /// Sentinel id of the derived "unassigned posts" pseudo-album.
    pub unassigned_album_id: i64,
    pub unassigned_album_title: String,
}

impl Default for AlbumConstants {
    fn default() -> Self {
        Self {
            unassigned_album_id: -1,
            unassigned_album_title: "Unassigned".to_owned(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConstants {
    pub recent_limit: i64,
}

impl Default for SearchConstants {
    fn default() -> Self {
        Self { recent_limit: 10 }
    }
}

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Append-only search log entry; `deleted_at` soft-deletes it.
#[derive(Debug, FromRow)]
pub struct SearchHistory {
    pub id: i64,
    pub from_user_id: i64,
    pub to_user_id: i64,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A collapsed "recent search" row joined with the target's profile.
#[derive(Debug, FromRow, Clone)]
pub struct RecentSearchRow {
    pub search_id: i64,
    pub user_id: i64,
    pub nickname: String,
    pub profile_image_url: Option<String>,
}

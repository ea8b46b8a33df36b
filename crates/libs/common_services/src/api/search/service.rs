use crate::api::search::error::SearchError;
use crate::api::search::interfaces::{
    RecentSearchEntry, RecentSearchesResponse, SavedSearchResponse,
};
use crate::database::search_history_store::SearchHistoryStore;
use crate::database::user_store::UserStore;
use app_state::constants;
use sqlx::PgPool;
use tracing::instrument;

/// Appends a history entry for a profile the caller looked up.
#[instrument(skip(pool))]
pub async fn save(
    pool: &PgPool,
    from_user_id: i64,
    to_user_id: i64,
) -> Result<SavedSearchResponse, SearchError> {
    if !UserStore::exists_by_id(pool, to_user_id).await? {
        return Err(SearchError::UserNotFound);
    }
    let entry = SearchHistoryStore::insert(pool, from_user_id, to_user_id).await?;
    Ok(SavedSearchResponse {
        search_id: entry.id,
    })
}

/// Recent searches, one entry per distinct target, newest first.
#[instrument(skip(pool))]
pub async fn recent(pool: &PgPool, user_id: i64) -> Result<RecentSearchesResponse, SearchError> {
    let rows =
        SearchHistoryStore::recent(pool, user_id, constants().search.recent_limit).await?;
    Ok(RecentSearchesResponse {
        searches: rows
            .into_iter()
            .map(|row| RecentSearchEntry {
                search_id: row.search_id,
                user_id: row.user_id,
                nickname: row.nickname,
                profile_image_url: row.profile_image_url,
            })
            .collect(),
    })
}

/// Hides every live entry for one target. Removing a target that was
/// never searched is not an error.
#[instrument(skip(pool))]
pub async fn remove(
    pool: &PgPool,
    from_user_id: i64,
    to_user_id: i64,
) -> Result<(), SearchError> {
    SearchHistoryStore::soft_delete_target(pool, from_user_id, to_user_id).await?;
    Ok(())
}

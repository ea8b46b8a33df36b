use crate::database::DbError;
use crate::database::tables::search_history::{RecentSearchRow, SearchHistory};
use sqlx::{Executor, Postgres};

pub struct SearchHistoryStore;

impl SearchHistoryStore {
    pub async fn insert(
        executor: impl Executor<'_, Database = Postgres>,
        from_user_id: i64,
        to_user_id: i64,
    ) -> Result<SearchHistory, DbError> {
        Ok(sqlx::query_as::<_, SearchHistory>(
            "INSERT INTO search_history (from_user_id, to_user_id)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(from_user_id)
        .bind(to_user_id)
        .fetch_one(executor)
        .await?)
    }

    /// Most recent searches, collapsed so each target user appears once
    /// (by their latest occurrence). Soft-deleted entries are skipped.
    pub async fn recent(
        executor: impl Executor<'_, Database = Postgres>,
        from_user_id: i64,
        limit: i64,
    ) -> Result<Vec<RecentSearchRow>, DbError> {
        Ok(sqlx::query_as::<_, RecentSearchRow>(
            "SELECT search_id, user_id, nickname, profile_image_url
             FROM (
                 SELECT DISTINCT ON (sh.to_user_id)
                        sh.id AS search_id,
                        u.id AS user_id,
                        u.nickname,
                        u.profile_image_url,
                        sh.created_at
                 FROM search_history sh
                 JOIN app_user u ON u.id = sh.to_user_id
                 WHERE sh.from_user_id = $1 AND sh.deleted_at IS NULL
                 ORDER BY sh.to_user_id, sh.created_at DESC
             ) latest
             ORDER BY latest.created_at DESC
             LIMIT $2",
        )
        .bind(from_user_id)
        .bind(limit)
        .fetch_all(executor)
        .await?)
    }

    /// Soft-deletes every live entry the owner logged for one target;
    /// returns whether any row matched.
    pub async fn soft_delete_target(
        executor: impl Executor<'_, Database = Postgres>,
        from_user_id: i64,
        to_user_id: i64,
    ) -> Result<bool, DbError> {
        let result = sqlx::query(
            "UPDATE search_history SET deleted_at = now()
             WHERE from_user_id = $1 AND to_user_id = $2 AND deleted_at IS NULL",
        )
        .bind(from_user_id)
        .bind(to_user_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

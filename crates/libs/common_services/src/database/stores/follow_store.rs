use crate::database::DbError;
use crate::database::tables::follow::FollowListEntry;
use sqlx::{Executor, Postgres};

pub struct FollowStore;

impl FollowStore {
    pub async fn exists(
        executor: impl Executor<'_, Database = Postgres>,
        from_user_id: i64,
        to_user_id: i64,
    ) -> Result<bool, DbError> {
        Ok(sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM follow WHERE from_user_id = $1 AND to_user_id = $2)",
        )
        .bind(from_user_id)
        .bind(to_user_id)
        .fetch_one(executor)
        .await?)
    }

    pub async fn insert(
        executor: impl Executor<'_, Database = Postgres>,
        from_user_id: i64,
        to_user_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO follow (from_user_id, to_user_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(from_user_id)
        .bind(to_user_id)
        .execute(executor)
        .await?;
        Ok(())
    }

    pub async fn delete(
        executor: impl Executor<'_, Database = Postgres>,
        from_user_id: i64,
        to_user_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query("DELETE FROM follow WHERE from_user_id = $1 AND to_user_id = $2")
            .bind(from_user_id)
            .bind(to_user_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    /// Users following `target`, each flagged with whether `viewer`
    /// follows them back (for "follow back" affordances).
    pub async fn list_followers(
        executor: impl Executor<'_, Database = Postgres>,
        target_user_id: i64,
        viewer_id: i64,
    ) -> Result<Vec<FollowListEntry>, DbError> {
        Ok(sqlx::query_as::<_, FollowListEntry>(
            "SELECT u.id AS user_id, u.nickname, u.profile_image_url,
                    EXISTS(SELECT 1 FROM follow f2
                           WHERE f2.from_user_id = $1 AND f2.to_user_id = u.id) AS is_following
             FROM follow f
             JOIN app_user u ON f.from_user_id = u.id
             WHERE f.to_user_id = $2
             ORDER BY u.nickname ASC",
        )
        .bind(viewer_id)
        .bind(target_user_id)
        .fetch_all(executor)
        .await?)
    }

    /// Users `target` follows, with the same viewer flag.
    pub async fn list_followings(
        executor: impl Executor<'_, Database = Postgres>,
        target_user_id: i64,
        viewer_id: i64,
    ) -> Result<Vec<FollowListEntry>, DbError> {
        Ok(sqlx::query_as::<_, FollowListEntry>(
            "SELECT u.id AS user_id, u.nickname, u.profile_image_url,
                    EXISTS(SELECT 1 FROM follow f2
                           WHERE f2.from_user_id = $1 AND f2.to_user_id = u.id) AS is_following
             FROM follow f
             JOIN app_user u ON f.to_user_id = u.id
             WHERE f.from_user_id = $2
             ORDER BY u.nickname ASC",
        )
        .bind(viewer_id)
        .bind(target_user_id)
        .fetch_all(executor)
        .await?)
    }

    /// The caller's outbound follow set, used by the feed.
    pub async fn following_ids(
        executor: impl Executor<'_, Database = Postgres>,
        from_user_id: i64,
    ) -> Result<Vec<i64>, DbError> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT to_user_id FROM follow WHERE from_user_id = $1")
                .bind(from_user_id)
                .fetch_all(executor)
                .await?,
        )
    }

    pub async fn count_followers(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
    ) -> Result<i64, DbError> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follow WHERE to_user_id = $1")
                .bind(user_id)
                .fetch_one(executor)
                .await?,
        )
    }

    pub async fn count_followings(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
    ) -> Result<i64, DbError> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follow WHERE from_user_id = $1")
                .bind(user_id)
                .fetch_one(executor)
                .await?,
        )
    }
}

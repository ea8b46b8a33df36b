use crate::database::DbError;
use crate::database::tables::story::{Story, StoryDetailRow, StoryFeedRow};
use sqlx::{Executor, Postgres};

pub struct StoryStore;

impl StoryStore {
    pub async fn insert(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
        image_url: &str,
    ) -> Result<Story, DbError> {
        Ok(sqlx::query_as::<_, Story>(
            "INSERT INTO story (user_id, image_url) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(image_url)
        .fetch_one(executor)
        .await?)
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        story_id: i64,
    ) -> Result<Option<Story>, DbError> {
        Ok(
            sqlx::query_as::<_, Story>("SELECT * FROM story WHERE id = $1")
                .bind(story_id)
                .fetch_optional(executor)
                .await?,
        )
    }

    /// Followed authors with at least one active story, flagged with
    /// whether the viewer still has unseen ones. Authors with unseen
    /// stories come first, ties broken by nickname.
    pub async fn feed_rows(
        executor: impl Executor<'_, Database = Postgres>,
        viewer_id: i64,
        window_hours: i32,
    ) -> Result<Vec<StoryFeedRow>, DbError> {
        Ok(sqlx::query_as::<_, StoryFeedRow>(
            "SELECT u.id AS user_id, u.nickname, u.profile_image_url,
                    (SELECT COUNT(*) FROM story s
                     WHERE s.user_id = u.id
                       AND s.created_at > now() - make_interval(hours => $2))
                    >
                    (SELECT COUNT(*) FROM story_view sv
                     JOIN story s ON s.id = sv.story_id
                     WHERE s.user_id = u.id
                       AND sv.user_id = $1
                       AND s.created_at > now() - make_interval(hours => $2))
                    AS has_unseen
             FROM app_user u
             WHERE u.id IN (SELECT to_user_id FROM follow WHERE from_user_id = $1)
               AND EXISTS(SELECT 1 FROM story s
                          WHERE s.user_id = u.id
                            AND s.created_at > now() - make_interval(hours => $2))
             ORDER BY has_unseen DESC, u.nickname ASC",
        )
        .bind(viewer_id)
        .bind(window_hours)
        .fetch_all(executor)
        .await?)
    }

    /// The viewer's own header entry when they have an active story.
    pub async fn own_feed_row(
        executor: impl Executor<'_, Database = Postgres>,
        viewer_id: i64,
        window_hours: i32,
    ) -> Result<Option<StoryFeedRow>, DbError> {
        Ok(sqlx::query_as::<_, StoryFeedRow>(
            "SELECT u.id AS user_id, u.nickname, u.profile_image_url, false AS has_unseen
             FROM app_user u
             WHERE u.id = $1
               AND EXISTS(SELECT 1 FROM story s
                          WHERE s.user_id = u.id
                            AND s.created_at > now() - make_interval(hours => $2))",
        )
        .bind(viewer_id)
        .bind(window_hours)
        .fetch_optional(executor)
        .await?)
    }

    /// One user's active stories, oldest first, with live view counts.
    pub async fn active_by_user(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
        window_hours: i32,
    ) -> Result<Vec<StoryDetailRow>, DbError> {
        Ok(sqlx::query_as::<_, StoryDetailRow>(
            "SELECT s.id AS story_id, s.image_url, s.created_at,
                    (SELECT COUNT(*) FROM story_view sv WHERE sv.story_id = s.id) AS view_count
             FROM story s
             WHERE s.user_id = $1
               AND s.created_at > now() - make_interval(hours => $2)
             ORDER BY s.created_at ASC",
        )
        .bind(user_id)
        .bind(window_hours)
        .fetch_all(executor)
        .await?)
    }

    pub async fn insert_views(
        conn: &mut sqlx::PgConnection,
        viewer_id: i64,
        story_ids: &[i64],
    ) -> Result<(), DbError> {
        for story_id in story_ids {
            sqlx::query(
                "INSERT INTO story_view (story_id, user_id) VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(story_id)
            .bind(viewer_id)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    pub async fn delete(
        executor: impl Executor<'_, Database = Postgres>,
        story_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query("DELETE FROM story WHERE id = $1")
            .bind(story_id)
            .execute(executor)
            .await?;
        Ok(())
    }
}

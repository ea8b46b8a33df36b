use crate::database::DbError;
use crate::database::tables::comment::Comment;
use sqlx::{Executor, Postgres};

pub struct CommentStore;

impl CommentStore {
    pub async fn insert(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
        user_id: i64,
        content: &str,
    ) -> Result<Comment, DbError> {
        Ok(sqlx::query_as::<_, Comment>(
            "INSERT INTO comment (post_id, user_id, content)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(post_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(executor)
        .await?)
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        comment_id: i64,
    ) -> Result<Option<Comment>, DbError> {
        Ok(
            sqlx::query_as::<_, Comment>("SELECT * FROM comment WHERE id = $1")
                .bind(comment_id)
                .fetch_optional(executor)
                .await?,
        )
    }

    pub async fn list_by_post_desc(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
    ) -> Result<Vec<Comment>, DbError> {
        Ok(sqlx::query_as::<_, Comment>(
            "SELECT * FROM comment WHERE post_id = $1 ORDER BY id DESC",
        )
        .bind(post_id)
        .fetch_all(executor)
        .await?)
    }

    pub async fn update_content(
        executor: impl Executor<'_, Database = Postgres>,
        comment_id: i64,
        content: &str,
    ) -> Result<Comment, DbError> {
        Ok(sqlx::query_as::<_, Comment>(
            "UPDATE comment SET content = $1, updated_at = now()
             WHERE id = $2
             RETURNING *",
        )
        .bind(content)
        .bind(comment_id)
        .fetch_one(executor)
        .await?)
    }

    pub async fn delete(
        executor: impl Executor<'_, Database = Postgres>,
        comment_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query("DELETE FROM comment WHERE id = $1")
            .bind(comment_id)
            .execute(executor)
            .await?;
        Ok(())
    }
}

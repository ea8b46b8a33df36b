use crate::database::DbError;
use crate::database::tables::post::{Post, PostEngagement, PostImage};
use sqlx::{Executor, Postgres};

pub struct PostStore;

impl PostStore {
    pub async fn insert(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
        album_id: Option<i64>,
        content: &str,
    ) -> Result<Post, DbError> {
        Ok(sqlx::query_as::<_, Post>(
            "INSERT INTO post (user_id, album_id, content)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(user_id)
        .bind(album_id)
        .bind(content)
        .fetch_one(executor)
        .await?)
    }

    /// Replaces the post's image list, preserving the given order.
    pub async fn replace_images(
        conn: &mut sqlx::PgConnection,
        post_id: i64,
        image_urls: &[String],
    ) -> Result<(), DbError> {
        sqlx::query("DELETE FROM post_image WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *conn)
            .await?;
        for (index, url) in image_urls.iter().enumerate() {
            sqlx::query(
                "INSERT INTO post_image (post_id, image_url, sort_order) VALUES ($1, $2, $3)",
            )
            .bind(post_id)
            .bind(url)
            .bind(index as i32)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
    ) -> Result<Option<Post>, DbError> {
        Ok(sqlx::query_as::<_, Post>("SELECT * FROM post WHERE id = $1")
            .bind(post_id)
            .fetch_optional(executor)
            .await?)
    }

    pub async fn exists(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
    ) -> Result<bool, DbError> {
        Ok(
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM post WHERE id = $1)")
                .bind(post_id)
                .fetch_one(executor)
                .await?,
        )
    }

    /// Takes a row-level lock on the post inside the surrounding
    /// transaction; returns false when the post does not exist.
    pub async fn lock_row(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
    ) -> Result<bool, DbError> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT id FROM post WHERE id = $1 FOR UPDATE")
                .bind(post_id)
                .fetch_optional(executor)
                .await?
                .is_some(),
        )
    }

    pub async fn list_images(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
    ) -> Result<Vec<PostImage>, DbError> {
        Ok(sqlx::query_as::<_, PostImage>(
            "SELECT * FROM post_image WHERE post_id = $1 ORDER BY sort_order ASC",
        )
        .bind(post_id)
        .fetch_all(executor)
        .await?)
    }

    pub async fn update(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
        content: &str,
        album_id: Option<i64>,
    ) -> Result<Post, DbError> {
        Ok(sqlx::query_as::<_, Post>(
            "UPDATE post SET content = $1, album_id = $2, updated_at = now()
             WHERE id = $3
             RETURNING *",
        )
        .bind(content)
        .bind(album_id)
        .bind(post_id)
        .fetch_one(executor)
        .await?)
    }

    pub async fn delete(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query("DELETE FROM post WHERE id = $1")
            .bind(post_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    /// All posts, newest first. Auto-increment id gives a stable total
    /// order where created_at alone could collide.
    pub async fn list_all_desc(
        executor: impl Executor<'_, Database = Postgres>,
    ) -> Result<Vec<Post>, DbError> {
        Ok(
            sqlx::query_as::<_, Post>("SELECT * FROM post ORDER BY id DESC")
                .fetch_all(executor)
                .await?,
        )
    }

    pub async fn list_bookmarked_by_user(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
    ) -> Result<Vec<Post>, DbError> {
        Ok(sqlx::query_as::<_, Post>(
            "SELECT p.* FROM post p
             JOIN bookmark b ON b.post_id = p.id
             WHERE b.user_id = $1
             ORDER BY b.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?)
    }

    /// One page of posts authored by any of the given users, newest first.
    pub async fn list_by_authors(
        executor: impl Executor<'_, Database = Postgres>,
        author_ids: &[i64],
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, DbError> {
        Ok(sqlx::query_as::<_, Post>(
            "SELECT * FROM post
             WHERE user_id = ANY($1)
             ORDER BY id DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(author_ids)
        .bind(limit)
        .bind(offset)
        .fetch_all(executor)
        .await?)
    }

    pub async fn count_by_authors(
        executor: impl Executor<'_, Database = Postgres>,
        author_ids: &[i64],
    ) -> Result<i64, DbError> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM post WHERE user_id = ANY($1)")
                .bind(author_ids)
                .fetch_one(executor)
                .await?,
        )
    }

    /// Live counts and viewer flags for one post. Existence checks, not
    /// denormalized counters, so the numbers are current at read time.
    pub async fn engagement(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
        viewer_id: Option<i64>,
    ) -> Result<PostEngagement, DbError> {
        Ok(sqlx::query_as::<_, PostEngagement>(
            "SELECT
                 (SELECT COUNT(*) FROM post_like WHERE post_id = $1) AS like_count,
                 (SELECT COUNT(*) FROM comment WHERE post_id = $1) AS comment_count,
                 EXISTS(SELECT 1 FROM post_like WHERE post_id = $1 AND user_id = $2) AS liked,
                 EXISTS(SELECT 1 FROM bookmark WHERE post_id = $1 AND user_id = $2) AS bookmarked",
        )
        .bind(post_id)
        .bind(viewer_id)
        .fetch_one(executor)
        .await?)
    }

    pub async fn like_exists(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
        user_id: i64,
    ) -> Result<bool, DbError> {
        Ok(sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM post_like WHERE post_id = $1 AND user_id = $2)",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(executor)
        .await?)
    }

    /// The unique constraint on (post_id, user_id) is the backstop should
    /// two inserts slip past the row lock.
    pub async fn insert_like(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
        user_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO post_like (post_id, user_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(post_id)
        .bind(user_id)
        .execute(executor)
        .await?;
        Ok(())
    }

    pub async fn delete_like(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
        user_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query("DELETE FROM post_like WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn bookmark_exists(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
        user_id: i64,
    ) -> Result<bool, DbError> {
        Ok(sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM bookmark WHERE post_id = $1 AND user_id = $2)",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(executor)
        .await?)
    }

    pub async fn insert_bookmark(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
        user_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO bookmark (post_id, user_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(post_id)
        .bind(user_id)
        .execute(executor)
        .await?;
        Ok(())
    }

    pub async fn delete_bookmark(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
        user_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query("DELETE FROM bookmark WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(executor)
            .await?;
        Ok(())
    }
}

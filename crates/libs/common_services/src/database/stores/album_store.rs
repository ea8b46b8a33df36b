use crate::database::DbError;
use crate::database::tables::album::{Album, AlbumPostRow, AlbumSummaryRow};
use sqlx::{Executor, Postgres};

pub struct AlbumStore;

impl AlbumStore {
    pub async fn insert(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
        title: &str,
    ) -> Result<Album, DbError> {
        Ok(sqlx::query_as::<_, Album>(
            "INSERT INTO album (user_id, title) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(title)
        .fetch_one(executor)
        .await?)
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        album_id: i64,
    ) -> Result<Option<Album>, DbError> {
        Ok(
            sqlx::query_as::<_, Album>("SELECT * FROM album WHERE id = $1")
                .bind(album_id)
                .fetch_optional(executor)
                .await?,
        )
    }

    /// Title uniqueness is scoped per owner.
    pub async fn exists_by_owner_and_title(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
        title: &str,
    ) -> Result<bool, DbError> {
        Ok(sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM album WHERE user_id = $1 AND title = $2)",
        )
        .bind(user_id)
        .bind(title)
        .fetch_one(executor)
        .await?)
    }

    /// The owner's persisted albums with live post counts and the first
    /// image of the newest post as thumbnail.
    pub async fn list_summaries_by_owner(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
    ) -> Result<Vec<AlbumSummaryRow>, DbError> {
        Ok(sqlx::query_as::<_, AlbumSummaryRow>(
            "SELECT a.id, a.title,
                    (SELECT COUNT(*) FROM post p WHERE p.album_id = a.id) AS post_count,
                    (SELECT pi.image_url
                     FROM post p
                     JOIN post_image pi ON pi.post_id = p.id
                     WHERE p.album_id = a.id
                     ORDER BY p.id DESC, pi.sort_order ASC
                     LIMIT 1) AS thumbnail_image_url
             FROM album a
             WHERE a.user_id = $1
             ORDER BY a.created_at DESC, a.id DESC",
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?)
    }

    /// Count and thumbnail over the owner's unassigned posts; feeds the
    /// derived pseudo-album.
    pub async fn unassigned_summary(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
    ) -> Result<(i64, Option<String>), DbError> {
        let row: (i64, Option<String>) = sqlx::query_as(
            "SELECT COUNT(*),
                    (SELECT pi.image_url
                     FROM post p2
                     JOIN post_image pi ON pi.post_id = p2.id
                     WHERE p2.user_id = $1 AND p2.album_id IS NULL
                     ORDER BY p2.id DESC, pi.sort_order ASC
                     LIMIT 1)
             FROM post p
             WHERE p.user_id = $1 AND p.album_id IS NULL",
        )
        .bind(user_id)
        .fetch_one(executor)
        .await?;
        Ok(row)
    }

    pub async fn list_posts(
        executor: impl Executor<'_, Database = Postgres>,
        album_id: i64,
    ) -> Result<Vec<AlbumPostRow>, DbError> {
        Ok(sqlx::query_as::<_, AlbumPostRow>(
            "SELECT p.id AS post_id,
                    (SELECT pi.image_url FROM post_image pi
                     WHERE pi.post_id = p.id
                     ORDER BY pi.sort_order ASC LIMIT 1) AS image_url,
                    (SELECT COUNT(*) FROM post_like pl WHERE pl.post_id = p.id) AS like_count,
                    (SELECT COUNT(*) FROM comment c WHERE c.post_id = p.id) AS comment_count
             FROM post p
             WHERE p.album_id = $1
             ORDER BY p.id DESC",
        )
        .bind(album_id)
        .fetch_all(executor)
        .await?)
    }

    pub async fn list_unassigned_posts(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
    ) -> Result<Vec<AlbumPostRow>, DbError> {
        Ok(sqlx::query_as::<_, AlbumPostRow>(
            "SELECT p.id AS post_id,
                    (SELECT pi.image_url FROM post_image pi
                     WHERE pi.post_id = p.id
                     ORDER BY pi.sort_order ASC LIMIT 1) AS image_url,
                    (SELECT COUNT(*) FROM post_like pl WHERE pl.post_id = p.id) AS like_count,
                    (SELECT COUNT(*) FROM comment c WHERE c.post_id = p.id) AS comment_count
             FROM post p
             WHERE p.user_id = $1 AND p.album_id IS NULL
             ORDER BY p.id DESC",
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?)
    }

    pub async fn update_title(
        executor: impl Executor<'_, Database = Postgres>,
        album_id: i64,
        title: &str,
    ) -> Result<(), DbError> {
        sqlx::query("UPDATE album SET title = $1 WHERE id = $2")
            .bind(title)
            .bind(album_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    /// Points a post at an album, or at none. Moving between albums is
    /// this single reference update.
    pub async fn set_post_album(
        executor: impl Executor<'_, Database = Postgres>,
        post_id: i64,
        album_id: Option<i64>,
    ) -> Result<(), DbError> {
        sqlx::query("UPDATE post SET album_id = $1 WHERE id = $2")
            .bind(album_id)
            .bind(post_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    /// Nulls the album reference of every post in the album. Must run
    /// before the album row is deleted.
    pub async fn detach_all_posts(
        executor: impl Executor<'_, Database = Postgres>,
        album_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query("UPDATE post SET album_id = NULL WHERE album_id = $1")
            .bind(album_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn delete(
        executor: impl Executor<'_, Database = Postgres>,
        album_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query("DELETE FROM album WHERE id = $1")
            .bind(album_id)
            .execute(executor)
            .await?;
        Ok(())
    }
}

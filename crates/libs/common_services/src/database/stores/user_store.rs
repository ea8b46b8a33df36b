use crate::database::DbError;
use crate::database::tables::app_user::{User, UserRole, UserWithPassword};
use sqlx::postgres::PgQueryResult;
use sqlx::{Executor, Postgres};

const USER_COLUMNS: &str = "id, email, nickname, profile_image_url, bio, role, \
                            provider, provider_id, created_at, updated_at";

pub struct UserStore;

impl UserStore {
    /// Creates a new user with a locally hashed credential.
    pub async fn create(
        executor: impl Executor<'_, Database = Postgres>,
        email: &str,
        hashed_password: &str,
        nickname: &str,
        role: UserRole,
    ) -> Result<User, DbError> {
        let sql = format!(
            "INSERT INTO app_user (email, password, nickname, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {USER_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .bind(hashed_password)
            .bind(nickname)
            .bind(role)
            .fetch_one(executor)
            .await?)
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
    ) -> Result<Option<User>, DbError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM app_user WHERE id = $1");
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(user_id)
            .fetch_optional(executor)
            .await?)
    }

    pub async fn find_by_email_with_password(
        executor: impl Executor<'_, Database = Postgres>,
        email: &str,
    ) -> Result<Option<UserWithPassword>, DbError> {
        Ok(sqlx::query_as::<_, UserWithPassword>(
            "SELECT * FROM app_user WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(executor)
        .await?)
    }

    pub async fn find_by_nickname_with_password(
        executor: impl Executor<'_, Database = Postgres>,
        nickname: &str,
    ) -> Result<Option<UserWithPassword>, DbError> {
        Ok(sqlx::query_as::<_, UserWithPassword>(
            "SELECT * FROM app_user WHERE nickname = $1",
        )
        .bind(nickname)
        .fetch_optional(executor)
        .await?)
    }

    pub async fn exists_by_email(
        executor: impl Executor<'_, Database = Postgres>,
        email: &str,
    ) -> Result<bool, DbError> {
        Ok(
            sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM app_user WHERE email = $1)",
            )
            .bind(email)
            .fetch_one(executor)
            .await?,
        )
    }

    pub async fn exists_by_nickname(
        executor: impl Executor<'_, Database = Postgres>,
        nickname: &str,
    ) -> Result<bool, DbError> {
        Ok(sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM app_user WHERE nickname = $1)",
        )
        .bind(nickname)
        .fetch_one(executor)
        .await?)
    }

    pub async fn exists_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
    ) -> Result<bool, DbError> {
        Ok(
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM app_user WHERE id = $1)")
                .bind(user_id)
                .fetch_one(executor)
                .await?,
        )
    }

    /// Updates profile display fields; `None` leaves a field unchanged.
    pub async fn update_profile(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
        nickname: Option<String>,
        bio: Option<String>,
        profile_image_url: Option<String>,
    ) -> Result<User, DbError> {
        let sql = format!(
            "UPDATE app_user
             SET nickname = COALESCE($1, nickname),
                 bio = COALESCE($2, bio),
                 profile_image_url = COALESCE($3, profile_image_url),
                 updated_at = now()
             WHERE id = $4
             RETURNING {USER_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(nickname)
            .bind(bio)
            .bind(profile_image_url)
            .bind(user_id)
            .fetch_one(executor)
            .await?)
    }

    /// Deletes the account row; dependent content is removed by the
    /// cascading foreign keys.
    pub async fn delete(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
    ) -> Result<PgQueryResult, DbError> {
        Ok(sqlx::query("DELETE FROM app_user WHERE id = $1")
            .bind(user_id)
            .execute(executor)
            .await?)
    }

    /// Case-insensitive nickname substring search.
    pub async fn search_by_nickname(
        executor: impl Executor<'_, Database = Postgres>,
        query: &str,
    ) -> Result<Vec<User>, DbError> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM app_user
             WHERE nickname ILIKE '%' || $1 || '%'
             ORDER BY nickname ASC"
        );
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(query)
            .fetch_all(executor)
            .await?)
    }

    pub async fn count_posts(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
    ) -> Result<i64, DbError> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM post WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(executor)
                .await?,
        )
    }
}

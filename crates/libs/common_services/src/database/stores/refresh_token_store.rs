use crate::database::DbError;
use crate::database::tables::refresh_token::RefreshToken;
use chrono::{DateTime, Utc};
use sqlx::{Executor, Postgres};

pub struct RefreshTokenStore;

impl RefreshTokenStore {
    pub async fn insert(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO refresh_token (user_id, token, expires_at) VALUES ($1, $2, $3)",
        )
        .bind(user_id)
        .bind(token)
        .bind(expires_at)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Locks the token row for the duration of the surrounding transaction
    /// so concurrent redemptions of the same token serialize.
    pub async fn find_by_token_for_update(
        executor: impl Executor<'_, Database = Postgres>,
        token: &str,
    ) -> Result<Option<RefreshToken>, DbError> {
        Ok(sqlx::query_as::<_, RefreshToken>(
            "SELECT * FROM refresh_token WHERE token = $1 FOR UPDATE",
        )
        .bind(token)
        .fetch_optional(executor)
        .await?)
    }

    pub async fn mark_used(
        executor: impl Executor<'_, Database = Postgres>,
        token_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query("UPDATE refresh_token SET used_at = now() WHERE id = $1")
            .bind(token_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn delete_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        token_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query("DELETE FROM refresh_token WHERE id = $1")
            .bind(token_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    /// Revokes every refresh credential of one user (login, logout, theft
    /// response, account deletion).
    pub async fn delete_all_for_user(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query("DELETE FROM refresh_token WHERE user_id = $1")
            .bind(user_id)
            .execute(executor)
            .await?;
        Ok(())
    }
}

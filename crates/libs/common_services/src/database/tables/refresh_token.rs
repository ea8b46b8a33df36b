use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A persisted refresh credential.
///
/// `used_at` is set exactly once, when the token is redeemed; a second
/// redemption attempt is treated as theft (see the auth service).
#[derive(Debug, FromRow)]
pub struct RefreshToken {
    pub id: i64,
    pub user_id: i64,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// A user row without the credential hash; safe to serialize.
#[derive(Debug, Serialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub profile_image_url: Option<String>,
    pub bio: Option<String>,
    pub role: UserRole,
    pub provider: Option<String>,
    pub provider_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user row including the password hash. Only the auth service reads this;
/// the hash is nullable because federated accounts have no local password.
#[derive(Debug, FromRow)]
pub struct UserWithPassword {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub profile_image_url: Option<String>,
    pub bio: Option<String>,
    pub role: UserRole,
    pub provider: Option<String>,
    pub provider_id: Option<String>,
    pub password: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Maps to the `user_role` Postgres enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
        }
    }
}

#![allow(dead_code)]

use common_services::database::app_user::{User, UserRole};
use common_services::database::user_store::UserStore;
use sqlx::PgPool;

pub const JWT_SECRET: &str = "integration-test-secret";

pub async fn create_user(pool: &PgPool, email: &str, nickname: &str) -> User {
    UserStore::create(pool, email, "not-a-real-hash", nickname, UserRole::User)
        .await
        .expect("user fixture")
}

mod helpers;

use common_services::api::auth::error::AuthError;
use common_services::api::auth::interfaces::{LoginRequest, SignupRequest};
use common_services::api::auth::service::{login, refresh, signup};
use helpers::JWT_SECRET;
use sqlx::PgPool;

async fn register_and_login(pool: &PgPool, nickname: &str) -> common_services::api::auth::interfaces::TokenPair {
    signup(
        pool,
        &SignupRequest {
            email: format!("{nickname}@example.com"),
            password: "hunter2".to_owned(),
            nickname: nickname.to_owned(),
        },
    )
    .await
    .expect("signup");

    login(
        pool,
        JWT_SECRET,
        &LoginRequest {
            identifier: nickname.to_owned(),
            password: "hunter2".to_owned(),
        },
    )
    .await
    .expect("login")
}

#[sqlx::test(migrations = "../../../migrations")]
async fn refresh_rotates_and_replay_revokes_the_family(pool: PgPool) {
    let first = register_and_login(&pool, "ana").await;

    let second = refresh(&pool, JWT_SECRET, &first.refresh_token)
        .await
        .expect("rotation");
    assert_ne!(first.refresh_token, second.refresh_token);

    // Presenting the spent token again is treated as theft.
    let replay = refresh(&pool, JWT_SECRET, &first.refresh_token).await;
    assert!(matches!(replay, Err(AuthError::RefreshTokenReuseDetected)));

    // The revocation took the freshly rotated token with it.
    let after = refresh(&pool, JWT_SECRET, &second.refresh_token).await;
    assert!(matches!(after, Err(AuthError::InvalidRefreshToken)));
}

#[sqlx::test(migrations = "../../../migrations")]
async fn a_new_login_invalidates_the_previous_session(pool: PgPool) {
    let first = register_and_login(&pool, "bo").await;

    let _second = login(
        &pool,
        JWT_SECRET,
        &LoginRequest {
            identifier: "bo".to_owned(),
            password: "hunter2".to_owned(),
        },
    )
    .await
    .expect("second login");

    let stale = refresh(&pool, JWT_SECRET, &first.refresh_token).await;
    assert!(matches!(stale, Err(AuthError::InvalidRefreshToken)));
}

#[sqlx::test(migrations = "../../../migrations")]
async fn expired_refresh_token_is_rejected_and_dropped(pool: PgPool) {
    let tokens = register_and_login(&pool, "cy").await;

    sqlx::query("UPDATE refresh_token SET expires_at = now() - interval '1 minute'")
        .execute(&pool)
        .await
        .expect("backdate expiry");

    let expired = refresh(&pool, JWT_SECRET, &tokens.refresh_token).await;
    assert!(matches!(expired, Err(AuthError::RefreshTokenExpired)));

    // The row is gone, so a second attempt no longer resolves at all.
    let gone = refresh(&pool, JWT_SECRET, &tokens.refresh_token).await;
    assert!(matches!(gone, Err(AuthError::InvalidRefreshToken)));
}

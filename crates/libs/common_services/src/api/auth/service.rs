use crate::api::auth::blacklist::TokenBlacklist;
use crate::api::auth::error::AuthError;
use crate::api::auth::hashing::{hash_password, verify_password};
use crate::api::auth::interfaces::{LoginRequest, SignupRequest, TokenPair};
use crate::api::auth::token::{
    TOKEN_TYPE_REFRESH, create_access_token, create_refresh_token, decode_token_allow_expired,
};
use crate::database::app_user::{User, UserRole};
use crate::database::refresh_token_store::RefreshTokenStore;
use crate::database::user_store::UserStore;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, instrument};

/// Registers a new account. Email and nickname must both be free.
#[instrument(skip(pool, payload))]
pub async fn signup(pool: &PgPool, payload: &SignupRequest) -> Result<User, AuthError> {
    let email = payload.email.trim();
    let nickname = payload.nickname.trim();
    if email.is_empty() || nickname.is_empty() || payload.password.is_empty() {
        return Err(AuthError::InvalidInput(
            "Email, nickname and password are required.".to_owned(),
        ));
    }

    if UserStore::exists_by_email(pool, email).await? {
        return Err(AuthError::EmailAlreadyExists);
    }
    if UserStore::exists_by_nickname(pool, nickname).await? {
        return Err(AuthError::NicknameAlreadyExists);
    }

    let hashed = hash_password(payload.password.as_bytes())?;
    info!("Creating user nickname={}", nickname);
    Ok(UserStore::create(pool, email, &hashed, nickname, UserRole::User).await?)
}

/// Authenticates by email or nickname. An `@` in the identifier means
/// email lookup, anything else is treated as a nickname.
#[instrument(skip(pool, payload))]
pub async fn login(
    pool: &PgPool,
    jwt_secret: &str,
    payload: &LoginRequest,
) -> Result<TokenPair, AuthError> {
    let identifier = payload.identifier.trim();
    let user = if identifier.contains('@') {
        UserStore::find_by_email_with_password(pool, identifier).await?
    } else {
        UserStore::find_by_nickname_with_password(pool, identifier).await?
    }
    .ok_or(AuthError::UserNotFound)?;

    let stored_hash = user.password.as_deref().ok_or(AuthError::InvalidPassword)?;
    if !verify_password(payload.password.as_bytes(), stored_hash)? {
        return Err(AuthError::InvalidPassword);
    }

    // Single-session policy: a fresh login invalidates every refresh
    // token issued before it.
    RefreshTokenStore::delete_all_for_user(pool, user.id).await?;

    issue_token_pair(pool, jwt_secret, user.id).await
}

/// Redeems a refresh token for a new pair, rotating the old one.
///
/// A token presented twice is treated as stolen: the whole session
/// family is revoked.
#[instrument(skip(pool, refresh_token))]
pub async fn refresh(
    pool: &PgPool,
    jwt_secret: &str,
    refresh_token: &str,
) -> Result<TokenPair, AuthError> {
    // The signature must verify before the database is consulted; the
    // stored row stays the source of truth for lifetime.
    let claims = decode_token_allow_expired(jwt_secret, refresh_token)?;
    if claims.token_type != TOKEN_TYPE_REFRESH {
        return Err(AuthError::InvalidRefreshToken);
    }

    let mut tx = pool.begin().await?;

    let Some(stored) = RefreshTokenStore::find_by_token_for_update(&mut *tx, refresh_token).await?
    else {
        return Err(AuthError::InvalidRefreshToken);
    };

    if stored.used_at.is_some() {
        RefreshTokenStore::delete_all_for_user(&mut *tx, stored.user_id).await?;
        tx.commit().await?;
        return Err(AuthError::RefreshTokenReuseDetected);
    }

    if stored.expires_at < Utc::now() {
        RefreshTokenStore::delete_by_id(&mut *tx, stored.id).await?;
        tx.commit().await?;
        return Err(AuthError::RefreshTokenExpired);
    }

    RefreshTokenStore::mark_used(&mut *tx, stored.id).await?;

    let (access_token, access_expiry) = create_access_token(jwt_secret, stored.user_id)?;
    let (new_refresh_token, refresh_expiry) = create_refresh_token(jwt_secret, stored.user_id)?;
    RefreshTokenStore::insert(&mut *tx, stored.user_id, &new_refresh_token, refresh_expiry)
        .await?;

    tx.commit().await?;

    Ok(TokenPair {
        access_token,
        refresh_token: new_refresh_token,
        access_token_expires_at: access_expiry,
    })
}

/// Ends the session: the access token goes on the denylist until it
/// would have expired, and all refresh tokens are revoked.
#[instrument(skip(pool, blacklist, access_token))]
pub async fn logout(
    pool: &PgPool,
    blacklist: &TokenBlacklist,
    user_id: i64,
    access_token: &str,
    access_token_exp: i64,
) -> Result<(), AuthError> {
    blacklist.insert(access_token, access_token_exp);
    RefreshTokenStore::delete_all_for_user(pool, user_id).await?;
    Ok(())
}

async fn issue_token_pair(
    pool: &PgPool,
    jwt_secret: &str,
    user_id: i64,
) -> Result<TokenPair, AuthError> {
    let (access_token, access_expiry) = create_access_token(jwt_secret, user_id)?;
    let (refresh_token, refresh_expiry) = create_refresh_token(jwt_secret, user_id)?;
    RefreshTokenStore::insert(pool, user_id, &refresh_token, refresh_expiry).await?;

    Ok(TokenPair {
        access_token,
        refresh_token,
        access_token_expires_at: access_expiry,
    })
}

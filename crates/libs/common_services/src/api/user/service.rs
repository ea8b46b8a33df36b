use crate::api::auth::blacklist::TokenBlacklist;
use crate::api::user::error::UserError;
use crate::api::user::interfaces::{
    ProfileResponse, UpdateProfileRequest, UserSearchEntry, UserSearchResponse,
};
use crate::database::app_user::User;
use crate::database::follow_store::FollowStore;
use crate::database::user_store::UserStore;
use sqlx::PgPool;
use tracing::{info, instrument};

/// A user's profile page: counts plus how the viewer relates to them.
#[instrument(skip(pool))]
pub async fn get_profile(
    pool: &PgPool,
    target_user_id: i64,
    viewer_id: i64,
) -> Result<ProfileResponse, UserError> {
    let user = UserStore::find_by_id(pool, target_user_id)
        .await?
        .ok_or(UserError::NotFound)?;

    let post_count = UserStore::count_posts(pool, user.id).await?;
    let follower_count = FollowStore::count_followers(pool, user.id).await?;
    let following_count = FollowStore::count_followings(pool, user.id).await?;
    let is_followed = FollowStore::exists(pool, viewer_id, user.id).await?;

    Ok(ProfileResponse {
        user_id: user.id,
        nickname: user.nickname,
        bio: user.bio,
        profile_image_url: user.profile_image_url,
        post_count,
        follower_count,
        following_count,
        is_me: user.id == viewer_id,
        is_followed,
    })
}

/// Updates display fields of the caller's own account.
#[instrument(skip(pool, payload))]
pub async fn update_me(
    pool: &PgPool,
    user_id: i64,
    payload: UpdateProfileRequest,
) -> Result<User, UserError> {
    if let Some(nickname) = payload.nickname.as_deref() {
        let trimmed = nickname.trim();
        if trimmed.is_empty() {
            return Err(UserError::InvalidInput("Nickname cannot be blank.".to_owned()));
        }
        if UserStore::exists_by_nickname(pool, trimmed).await? {
            let current = UserStore::find_by_id(pool, user_id)
                .await?
                .ok_or(UserError::NotFound)?;
            if current.nickname != trimmed {
                return Err(UserError::NicknameAlreadyExists);
            }
        }
    }

    Ok(UserStore::update_profile(
        pool,
        user_id,
        payload.nickname.map(|n| n.trim().to_owned()),
        payload.bio,
        payload.profile_image_url,
    )
    .await?)
}

/// Deletes the caller's account. The presented access token is
/// denylisted so it cannot be replayed after the rows are gone.
#[instrument(skip(pool, blacklist, access_token))]
pub async fn delete_me(
    pool: &PgPool,
    blacklist: &TokenBlacklist,
    user_id: i64,
    access_token: &str,
    access_token_exp: i64,
) -> Result<(), UserError> {
    blacklist.insert(access_token, access_token_exp);
    UserStore::delete(pool, user_id).await?;
    info!("Deleted account user_id={}", user_id);
    Ok(())
}

/// Case-insensitive nickname search.
#[instrument(skip(pool))]
pub async fn search(pool: &PgPool, query: &str) -> Result<UserSearchResponse, UserError> {
    let users = UserStore::search_by_nickname(pool, query).await?;
    Ok(UserSearchResponse {
        users: users
            .into_iter()
            .map(|user| UserSearchEntry {
                user_id: user.id,
                nickname: user.nickname,
                profile_image_url: user.profile_image_url,
            })
            .collect(),
    })
}

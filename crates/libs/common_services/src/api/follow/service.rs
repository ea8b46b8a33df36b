use crate::api::follow::error::FollowError;
use crate::api::follow::interfaces::{FollowListResponse, FollowToggleResponse};
use crate::database::follow_store::FollowStore;
use crate::database::user_store::UserStore;
use sqlx::PgPool;
use tracing::instrument;

/// Follows the target if not yet followed, unfollows otherwise.
#[instrument(skip(pool))]
pub async fn toggle(
    pool: &PgPool,
    from_user_id: i64,
    to_user_id: i64,
) -> Result<FollowToggleResponse, FollowError> {
    if from_user_id == to_user_id {
        return Err(FollowError::SelfFollowNotAllowed);
    }
    if !UserStore::exists_by_id(pool, to_user_id).await? {
        return Err(FollowError::UserNotFound);
    }

    let is_following = if FollowStore::exists(pool, from_user_id, to_user_id).await? {
        FollowStore::delete(pool, from_user_id, to_user_id).await?;
        false
    } else {
        FollowStore::insert(pool, from_user_id, to_user_id).await?;
        true
    };

    Ok(FollowToggleResponse {
        user_id: to_user_id,
        is_following,
    })
}

/// Evicts a user from the caller's follower list by deleting the
/// inbound edge. The follower's cooperation is not required.
#[instrument(skip(pool))]
pub async fn remove_follower(
    pool: &PgPool,
    me: i64,
    follower_id: i64,
) -> Result<(), FollowError> {
    if !UserStore::exists_by_id(pool, follower_id).await? {
        return Err(FollowError::UserNotFound);
    }
    FollowStore::delete(pool, follower_id, me).await?;
    Ok(())
}

#[instrument(skip(pool))]
pub async fn followers(
    pool: &PgPool,
    target_user_id: i64,
    viewer_id: i64,
) -> Result<FollowListResponse, FollowError> {
    if !UserStore::exists_by_id(pool, target_user_id).await? {
        return Err(FollowError::UserNotFound);
    }
    let users = FollowStore::list_followers(pool, target_user_id, viewer_id).await?;
    Ok(FollowListResponse { users })
}

#[instrument(skip(pool))]
pub async fn followings(
    pool: &PgPool,
    target_user_id: i64,
    viewer_id: i64,
) -> Result<FollowListResponse, FollowError> {
    if !UserStore::exists_by_id(pool, target_user_id).await? {
        return Err(FollowError::UserNotFound);
    }
    let users = FollowStore::list_followings(pool, target_user_id, viewer_id).await?;
    Ok(FollowListResponse { users })
}

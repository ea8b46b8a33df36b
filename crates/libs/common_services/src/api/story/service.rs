use crate::api::story::error::StoryError;
use crate::api::story::interfaces::{
    StoryDetail, StoryFeedEntry, StoryFeedResponse, StoryResponse, UserStoriesResponse,
};
use crate::database::story_store::StoryStore;
use crate::database::user_store::UserStore;
use app_state::constants;
use sqlx::PgPool;
use tracing::instrument;

fn window_hours() -> i32 {
    constants().story.active_window_hours as i32
}

#[instrument(skip(pool, image_url))]
pub async fn create(
    pool: &PgPool,
    user_id: i64,
    image_url: &str,
) -> Result<StoryResponse, StoryError> {
    let image_url = image_url.trim();
    if image_url.is_empty() {
        return Err(StoryError::InvalidInput(
            "Image URL cannot be blank.".to_owned(),
        ));
    }
    let story = StoryStore::insert(pool, user_id, image_url).await?;
    Ok(StoryResponse {
        story_id: story.id,
        image_url: story.image_url,
        created_at: story.created_at,
    })
}

/// The header strip: followed authors with an active story, unseen
/// first. The caller's own entry, when present, is always at the front
/// and never marked unseen.
#[instrument(skip(pool))]
pub async fn feed(pool: &PgPool, viewer_id: i64) -> Result<StoryFeedResponse, StoryError> {
    let mut stories = Vec::new();

    if let Some(own) = StoryStore::own_feed_row(pool, viewer_id, window_hours()).await? {
        stories.push(StoryFeedEntry {
            user_id: own.user_id,
            nickname: own.nickname,
            profile_image_url: own.profile_image_url,
            has_unseen_story: false,
        });
    }

    for row in StoryStore::feed_rows(pool, viewer_id, window_hours()).await? {
        stories.push(StoryFeedEntry {
            user_id: row.user_id,
            nickname: row.nickname,
            profile_image_url: row.profile_image_url,
            has_unseen_story: row.has_unseen,
        });
    }

    Ok(StoryFeedResponse { stories })
}

/// A user's active stories, oldest first. Reading someone else's
/// stories marks them seen for the caller and hides view counts; the
/// owner sees counts and logs no views.
#[instrument(skip(pool))]
pub async fn user_stories(
    pool: &PgPool,
    caller_id: i64,
    target_user_id: i64,
) -> Result<UserStoriesResponse, StoryError> {
    if !UserStore::exists_by_id(pool, target_user_id).await? {
        return Err(StoryError::UserNotFound);
    }

    let rows = StoryStore::active_by_user(pool, target_user_id, window_hours()).await?;
    let is_owner = caller_id == target_user_id;

    if !is_owner && !rows.is_empty() {
        let story_ids: Vec<i64> = rows.iter().map(|row| row.story_id).collect();
        let mut tx = pool.begin().await?;
        StoryStore::insert_views(&mut *tx, caller_id, &story_ids).await?;
        tx.commit().await?;
    }

    Ok(UserStoriesResponse {
        user_id: target_user_id,
        stories: rows
            .into_iter()
            .map(|row| StoryDetail {
                story_id: row.story_id,
                image_url: row.image_url,
                created_at: row.created_at,
                view_count: is_owner.then_some(row.view_count),
            })
            .collect(),
    })
}

#[instrument(skip(pool))]
pub async fn delete(pool: &PgPool, user_id: i64, story_id: i64) -> Result<(), StoryError> {
    let story = StoryStore::find_by_id(pool, story_id)
        .await?
        .ok_or(StoryError::NotFound)?;
    if story.user_id != user_id {
        return Err(StoryError::NotOwner);
    }
    StoryStore::delete(pool, story_id).await?;
    Ok(())
}

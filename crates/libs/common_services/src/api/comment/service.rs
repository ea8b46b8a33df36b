use crate::api::comment::error::CommentError;
use crate::api::comment::interfaces::CommentResponse;
use crate::database::comment::Comment;
use crate::database::comment_store::CommentStore;
use crate::database::post_store::PostStore;
use crate::database::user_store::UserStore;
use sqlx::PgPool;
use tracing::instrument;

#[instrument(skip(pool, content))]
pub async fn create(
    pool: &PgPool,
    user_id: i64,
    post_id: i64,
    content: &str,
) -> Result<CommentResponse, CommentError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(CommentError::EmptyContent);
    }
    if !PostStore::exists(pool, post_id).await? {
        return Err(CommentError::PostNotFound);
    }

    let comment = CommentStore::insert(pool, post_id, user_id, content).await?;
    to_response(pool, comment).await
}

/// A post's comments, newest first.
#[instrument(skip(pool))]
pub async fn list(pool: &PgPool, post_id: i64) -> Result<Vec<CommentResponse>, CommentError> {
    if !PostStore::exists(pool, post_id).await? {
        return Err(CommentError::PostNotFound);
    }

    let comments = CommentStore::list_by_post_desc(pool, post_id).await?;
    let mut items = Vec::with_capacity(comments.len());
    for comment in comments {
        items.push(to_response(pool, comment).await?);
    }
    Ok(items)
}

#[instrument(skip(pool, content))]
pub async fn update(
    pool: &PgPool,
    user_id: i64,
    comment_id: i64,
    content: &str,
) -> Result<CommentResponse, CommentError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(CommentError::EmptyContent);
    }

    let comment = CommentStore::find_by_id(pool, comment_id)
        .await?
        .ok_or(CommentError::NotFound)?;
    if comment.user_id != user_id {
        return Err(CommentError::AccessDenied);
    }

    let updated = CommentStore::update_content(pool, comment_id, content).await?;
    to_response(pool, updated).await
}

#[instrument(skip(pool))]
pub async fn delete(pool: &PgPool, user_id: i64, comment_id: i64) -> Result<(), CommentError> {
    let comment = CommentStore::find_by_id(pool, comment_id)
        .await?
        .ok_or(CommentError::NotFound)?;
    if comment.user_id != user_id {
        return Err(CommentError::AccessDenied);
    }
    CommentStore::delete(pool, comment_id).await?;
    Ok(())
}

async fn to_response(pool: &PgPool, comment: Comment) -> Result<CommentResponse, CommentError> {
    let author = UserStore::find_by_id(pool, comment.user_id)
        .await?
        .ok_or(CommentError::UserNotFound)?;

    Ok(CommentResponse {
        id: comment.id,
        post_id: comment.post_id,
        user_id: author.id,
        nickname: author.nickname,
        profile_image_url: author.profile_image_url,
        content: comment.content,
        created_at: comment.created_at,
        updated_at: comment.updated_at,
    })
}

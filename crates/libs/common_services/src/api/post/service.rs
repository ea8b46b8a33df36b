use crate::api::post::error::PostError;
use crate::api::post::interfaces::{
    CreatePostRequest, PostImageResponse, PostResponse, UpdatePostRequest,
};
use crate::database::post::Post;
use crate::database::post_store::PostStore;
use crate::database::user_store::UserStore;
use sqlx::PgPool;
use tracing::instrument;

#[instrument(skip(pool, payload))]
pub async fn create(
    pool: &PgPool,
    user_id: i64,
    payload: CreatePostRequest,
) -> Result<PostResponse, PostError> {
    let content = payload.content.trim();
    if content.is_empty() {
        return Err(PostError::EmptyContent);
    }

    let mut tx = pool.begin().await?;
    let post = PostStore::insert(&mut *tx, user_id, payload.album_id, content).await?;
    PostStore::replace_images(&mut *tx, post.id, &payload.image_urls).await?;
    tx.commit().await?;

    to_response(pool, post, Some(user_id)).await
}

#[instrument(skip(pool))]
pub async fn get(
    pool: &PgPool,
    post_id: i64,
    viewer_id: Option<i64>,
) -> Result<PostResponse, PostError> {
    let post = PostStore::find_by_id(pool, post_id)
        .await?
        .ok_or(PostError::NotFound)?;
    to_response(pool, post, viewer_id).await
}

/// All posts newest-first. Anonymous viewers get unset liked/bookmarked
/// flags.
#[instrument(skip(pool))]
pub async fn search(
    pool: &PgPool,
    viewer_id: Option<i64>,
) -> Result<Vec<PostResponse>, PostError> {
    let posts = PostStore::list_all_desc(pool).await?;
    let mut items = Vec::with_capacity(posts.len());
    for post in posts {
        items.push(to_response(pool, post, viewer_id).await?);
    }
    Ok(items)
}

#[instrument(skip(pool))]
pub async fn bookmarked(pool: &PgPool, user_id: i64) -> Result<Vec<PostResponse>, PostError> {
    let posts = PostStore::list_bookmarked_by_user(pool, user_id).await?;
    let mut items = Vec::with_capacity(posts.len());
    for post in posts {
        items.push(to_response(pool, post, Some(user_id)).await?);
    }
    Ok(items)
}

#[instrument(skip(pool, payload))]
pub async fn update(
    pool: &PgPool,
    user_id: i64,
    post_id: i64,
    payload: UpdatePostRequest,
) -> Result<PostResponse, PostError> {
    let content = payload.content.trim();
    if content.is_empty() {
        return Err(PostError::EmptyContent);
    }

    let post = PostStore::find_by_id(pool, post_id)
        .await?
        .ok_or(PostError::NotFound)?;
    if post.user_id != user_id {
        return Err(PostError::AccessDenied);
    }

    let mut tx = pool.begin().await?;
    let updated = PostStore::update(&mut *tx, post_id, content, payload.album_id).await?;
    if let Some(image_urls) = &payload.image_urls {
        PostStore::replace_images(&mut *tx, post_id, image_urls).await?;
    }
    tx.commit().await?;

    to_response(pool, updated, Some(user_id)).await
}

#[instrument(skip(pool))]
pub async fn delete(pool: &PgPool, user_id: i64, post_id: i64) -> Result<(), PostError> {
    let post = PostStore::find_by_id(pool, post_id)
        .await?
        .ok_or(PostError::NotFound)?;
    if post.user_id != user_id {
        return Err(PostError::AccessDenied);
    }
    PostStore::delete(pool, post_id).await?;
    Ok(())
}

/// Idempotent like. The row lock serializes concurrent toggles against
/// the same post; the unique constraint is the backstop.
#[instrument(skip(pool))]
pub async fn like(pool: &PgPool, user_id: i64, post_id: i64) -> Result<(), PostError> {
    let mut tx = pool.begin().await?;
    if !PostStore::lock_row(&mut *tx, post_id).await? {
        return Err(PostError::NotFound);
    }
    if !PostStore::like_exists(&mut *tx, post_id, user_id).await? {
        PostStore::insert_like(&mut *tx, post_id, user_id).await?;
    }
    tx.commit().await?;
    Ok(())
}

/// Removing an absent like is not an error.
#[instrument(skip(pool))]
pub async fn unlike(pool: &PgPool, user_id: i64, post_id: i64) -> Result<(), PostError> {
    if !PostStore::exists(pool, post_id).await? {
        return Err(PostError::NotFound);
    }
    PostStore::delete_like(pool, post_id, user_id).await?;
    Ok(())
}

#[instrument(skip(pool))]
pub async fn bookmark(pool: &PgPool, user_id: i64, post_id: i64) -> Result<(), PostError> {
    let mut tx = pool.begin().await?;
    if !PostStore::lock_row(&mut *tx, post_id).await? {
        return Err(PostError::NotFound);
    }
    if !PostStore::bookmark_exists(&mut *tx, post_id, user_id).await? {
        PostStore::insert_bookmark(&mut *tx, post_id, user_id).await?;
    }
    tx.commit().await?;
    Ok(())
}

#[instrument(skip(pool))]
pub async fn unbookmark(pool: &PgPool, user_id: i64, post_id: i64) -> Result<(), PostError> {
    if !PostStore::exists(pool, post_id).await? {
        return Err(PostError::NotFound);
    }
    PostStore::delete_bookmark(pool, post_id, user_id).await?;
    Ok(())
}

/// Enriches a post row with its author snapshot, ordered images and
/// live engagement state. Counts are existence checks at read time,
/// never denormalized.
pub(crate) async fn to_response(
    pool: &PgPool,
    post: Post,
    viewer_id: Option<i64>,
) -> Result<PostResponse, PostError> {
    let author = UserStore::find_by_id(pool, post.user_id)
        .await?
        .ok_or(PostError::UserNotFound)?;
    let images = PostStore::list_images(pool, post.id).await?;
    let engagement = PostStore::engagement(pool, post.id, viewer_id).await?;

    Ok(PostResponse {
        id: post.id,
        user_id: author.id,
        nickname: author.nickname,
        profile_image_url: author.profile_image_url,
        content: post.content,
        album_id: post.album_id,
        images: images
            .into_iter()
            .map(|image| PostImageResponse {
                id: image.id,
                url: image.image_url,
                order_index: image.sort_order,
            })
            .collect(),
        like_count: engagement.like_count,
        comment_count: engagement.comment_count,
        is_liked: engagement.liked,
        is_bookmarked: engagement.bookmarked,
        created_at: post.created_at,
        updated_at: post.updated_at,
    })
}

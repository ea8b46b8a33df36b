use crate::api::feed::error::FeedError;
use crate::api::feed::interfaces::{FeedAuthor, FeedParams, FeedPost, FeedResponse};
use crate::api::feed::pagination::{has_next, has_prev, page_window, total_pages};
use crate::database::follow_store::FollowStore;
use crate::database::post_store::PostStore;
use crate::database::user_store::UserStore;
use sqlx::PgPool;
use tracing::instrument;

/// Builds one page of the caller's timeline: posts by followed authors,
/// newest first by id, enriched per item at read time.
#[instrument(skip(pool))]
pub async fn get_feed(
    pool: &PgPool,
    user_id: i64,
    params: FeedParams,
) -> Result<FeedResponse, FeedError> {
    let window = page_window(params.page, params.size);

    let following = FollowStore::following_ids(pool, user_id).await?;
    if following.is_empty() {
        return Ok(FeedResponse::empty(window.page, window.size));
    }

    let posts = PostStore::list_by_authors(pool, &following, window.size, window.offset).await?;
    let total_elements = PostStore::count_by_authors(pool, &following).await?;
    let pages = total_pages(total_elements, window.size);

    let mut items = Vec::with_capacity(posts.len());
    for post in posts {
        let author = UserStore::find_by_id(pool, post.user_id)
            .await?
            .ok_or(FeedError::UserNotFound)?;
        let engagement = PostStore::engagement(pool, post.id, Some(user_id)).await?;
        let thumbnail = PostStore::list_images(pool, post.id)
            .await?
            .into_iter()
            .next()
            .map(|image| image.image_url);

        items.push(FeedPost {
            post_id: post.id,
            author: FeedAuthor {
                user_id: author.id,
                nickname: author.nickname,
                profile_image_url: author.profile_image_url,
            },
            thumbnail_image_url: thumbnail,
            like_count: engagement.like_count,
            comment_count: engagement.comment_count,
            created_at: post.created_at,
            liked: engagement.liked,
            bookmarked: engagement.bookmarked,
        });
    }

    Ok(FeedResponse {
        items,
        page: window.page,
        size: window.size,
        total_pages: pages,
        total_elements,
        has_next: has_next(window.page, pages),
        has_prev: has_prev(window.page),
    })
}

mod helpers;

use common_services::api::post::error::PostError;
use common_services::api::post::interfaces::{CreatePostRequest, UpdatePostRequest};
use common_services::api::post::service;
use sqlx::PgPool;

fn post_payload(content: &str) -> CreatePostRequest {
    CreatePostRequest {
        content: content.to_owned(),
        album_id: None,
        image_urls: vec![],
    }
}

#[sqlx::test(migrations = "../../../migrations")]
async fn repeated_likes_and_bookmarks_count_once(pool: PgPool) {
    let author = helpers::create_user(&pool, "author@example.com", "author").await;
    let fan = helpers::create_user(&pool, "fan@example.com", "fan").await;
    let post = service::create(&pool, author.id, post_payload("first light"))
        .await
        .expect("create post");

    service::like(&pool, fan.id, post.id).await.expect("like");
    service::like(&pool, fan.id, post.id).await.expect("like again");
    service::bookmark(&pool, fan.id, post.id).await.expect("bookmark");
    service::bookmark(&pool, fan.id, post.id)
        .await
        .expect("bookmark again");

    let seen = service::get(&pool, post.id, Some(fan.id)).await.expect("get");
    assert_eq!(seen.like_count, 1);
    assert!(seen.is_liked);
    assert!(seen.is_bookmarked);

    // Removing an absent like stays a no-op.
    service::unlike(&pool, fan.id, post.id).await.expect("unlike");
    service::unlike(&pool, fan.id, post.id).await.expect("unlike again");

    let seen = service::get(&pool, post.id, Some(fan.id)).await.expect("get");
    assert_eq!(seen.like_count, 0);
    assert!(!seen.is_liked);
}

#[sqlx::test(migrations = "../../../migrations")]
async fn only_the_author_may_edit_or_delete(pool: PgPool) {
    let author = helpers::create_user(&pool, "owner@example.com", "owner").await;
    let intruder = helpers::create_user(&pool, "other@example.com", "other").await;
    let post = service::create(&pool, author.id, post_payload("mine"))
        .await
        .expect("create post");

    let edit = service::update(
        &pool,
        intruder.id,
        post.id,
        UpdatePostRequest {
            content: "hijacked".to_owned(),
            album_id: None,
            image_urls: None,
        },
    )
    .await;
    assert!(matches!(edit, Err(PostError::AccessDenied)));

    let delete = service::delete(&pool, intruder.id, post.id).await;
    assert!(matches!(delete, Err(PostError::AccessDenied)));

    // The owner still can.
    service::delete(&pool, author.id, post.id).await.expect("owner delete");
}

#[sqlx::test(migrations = "../../../migrations")]
async fn blank_content_is_rejected(pool: PgPool) {
    let author = helpers::create_user(&pool, "b@example.com", "blank").await;
    let result = service::create(&pool, author.id, post_payload("   ")).await;
    assert!(matches!(result, Err(PostError::EmptyContent)));
}

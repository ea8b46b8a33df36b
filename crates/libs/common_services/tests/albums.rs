mod helpers;

use app_state::constants;
use common_services::api::album::error::AlbumError;
use common_services::api::album::service as albums;
use common_services::api::post::interfaces::CreatePostRequest;
use common_services::api::post::service as posts;
use sqlx::PgPool;

async fn unassigned_post(pool: &PgPool, user_id: i64, content: &str) -> i64 {
    posts::create(
        pool,
        user_id,
        CreatePostRequest {
            content: content.to_owned(),
            album_id: None,
            image_urls: vec![],
        },
    )
    .await
    .expect("create post")
    .id
}

#[sqlx::test(migrations = "../../../migrations")]
async fn adding_a_post_moves_it_between_albums(pool: PgPool) {
    let owner = helpers::create_user(&pool, "al@example.com", "al").await;
    let trips = albums::create(&pool, owner.id, "Trips").await.expect("album");
    let food = albums::create(&pool, owner.id, "Food").await.expect("album");
    let post_id = unassigned_post(&pool, owner.id, "pier at dusk").await;

    albums::add_post(&pool, owner.id, trips.album_id, post_id)
        .await
        .expect("add to trips");
    albums::add_post(&pool, owner.id, food.album_id, post_id)
        .await
        .expect("move to food");

    let trips_detail = albums::detail(&pool, owner.id, trips.album_id)
        .await
        .expect("trips detail");
    assert!(trips_detail.posts.is_empty());

    let food_detail = albums::detail(&pool, owner.id, food.album_id)
        .await
        .expect("food detail");
    assert_eq!(food_detail.posts.len(), 1);

    // Re-adding to the current album is a silent no-op.
    albums::add_post(&pool, owner.id, food.album_id, post_id)
        .await
        .expect("idempotent add");

    // Removing from an album the post is not in is an error.
    let wrong = albums::remove_post(&pool, owner.id, trips.album_id, post_id).await;
    assert!(matches!(wrong, Err(AlbumError::PostNotInAlbum)));
}

#[sqlx::test(migrations = "../../../migrations")]
async fn deleting_an_album_keeps_its_posts(pool: PgPool) {
    let owner = helpers::create_user(&pool, "keep@example.com", "keep").await;
    let album = albums::create(&pool, owner.id, "Doomed").await.expect("album");
    let post_id = unassigned_post(&pool, owner.id, "survivor").await;
    albums::add_post(&pool, owner.id, album.album_id, post_id)
        .await
        .expect("add");

    albums::delete(&pool, owner.id, album.album_id)
        .await
        .expect("delete album");

    let post = posts::get(&pool, post_id, Some(owner.id)).await.expect("post lives");
    assert_eq!(post.album_id, None);
}

#[sqlx::test(migrations = "../../../migrations")]
async fn pseudo_album_appears_only_with_unassigned_posts(pool: PgPool) {
    let owner = helpers::create_user(&pool, "un@example.com", "un").await;
    let sentinel = constants().album.unassigned_album_id;

    let before = albums::list_mine(&pool, owner.id).await.expect("list");
    assert!(before.albums.iter().all(|a| a.album_id != sentinel));

    unassigned_post(&pool, owner.id, "floating").await;

    let after = albums::list_mine(&pool, owner.id).await.expect("list");
    let first = after.albums.first().expect("one entry");
    assert_eq!(first.album_id, sentinel);
    assert_eq!(first.post_count, 1);
}

#[sqlx::test(migrations = "../../../migrations")]
async fn foreign_albums_are_not_readable(pool: PgPool) {
    let owner = helpers::create_user(&pool, "mine@example.com", "mine").await;
    let stranger = helpers::create_user(&pool, "theirs@example.com", "theirs").await;
    let album = albums::create(&pool, owner.id, "Private").await.expect("album");

    let peek = albums::detail(&pool, stranger.id, album.album_id).await;
    assert!(matches!(peek, Err(AlbumError::AccessDenied)));
}

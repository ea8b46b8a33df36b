mod helpers;

use common_services::api::follow::error::FollowError;
use common_services::api::follow::service as follows;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../../migrations")]
async fn self_follow_is_rejected(pool: PgPool) {
    let user = helpers::create_user(&pool, "me@example.com", "me").await;
    let result = follows::toggle(&pool, user.id, user.id).await;
    assert!(matches!(result, Err(FollowError::SelfFollowNotAllowed)));
}

#[sqlx::test(migrations = "../../../migrations")]
async fn toggle_follows_then_unfollows(pool: PgPool) {
    let from = helpers::create_user(&pool, "from@example.com", "from").await;
    let to = helpers::create_user(&pool, "to@example.com", "to").await;

    let on = follows::toggle(&pool, from.id, to.id).await.expect("follow");
    assert!(on.is_following);

    let off = follows::toggle(&pool, from.id, to.id).await.expect("unfollow");
    assert!(!off.is_following);
}

#[sqlx::test(migrations = "../../../migrations")]
async fn a_follower_can_be_evicted_unilaterally(pool: PgPool) {
    let fan = helpers::create_user(&pool, "fan2@example.com", "fan2").await;
    let target = helpers::create_user(&pool, "star@example.com", "star").await;
    follows::toggle(&pool, fan.id, target.id).await.expect("follow");

    follows::remove_follower(&pool, target.id, fan.id)
        .await
        .expect("evict");

    let list = follows::followers(&pool, target.id, target.id)
        .await
        .expect("followers");
    assert!(list.users.is_empty());
}

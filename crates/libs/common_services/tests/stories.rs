mod helpers;

use common_services::api::story::error::StoryError;
use common_services::api::story::service as stories;
use sqlx::PgPool;

async fn backdate_story(pool: &PgPool, story_id: i64, hours: i32) {
    sqlx::query("UPDATE story SET created_at = now() - make_interval(hours => $2) WHERE id = $1")
        .bind(story_id)
        .bind(hours)
        .execute(pool)
        .await
        .expect("backdate story");
}

#[sqlx::test(migrations = "../../../migrations")]
async fn stories_expire_after_twenty_four_hours(pool: PgPool) {
    let owner = helpers::create_user(&pool, "st@example.com", "st").await;
    let story = stories::create(&pool, owner.id, "https://cdn/st/1.jpg")
        .await
        .expect("create story");

    backdate_story(&pool, story.story_id, 23).await;
    let visible = stories::user_stories(&pool, owner.id, owner.id)
        .await
        .expect("stories at 23h");
    assert_eq!(visible.stories.len(), 1);

    backdate_story(&pool, story.story_id, 25).await;
    let gone = stories::user_stories(&pool, owner.id, owner.id)
        .await
        .expect("stories at 25h");
    assert!(gone.stories.is_empty());
}

#[sqlx::test(migrations = "../../../migrations")]
async fn viewing_logs_views_only_for_others(pool: PgPool) {
    let owner = helpers::create_user(&pool, "vo@example.com", "vo").await;
    let viewer = helpers::create_user(&pool, "vw@example.com", "vw").await;
    stories::create(&pool, owner.id, "https://cdn/vo/1.jpg")
        .await
        .expect("create story");

    // The owner reads without logging a view and sees the count.
    let own = stories::user_stories(&pool, owner.id, owner.id)
        .await
        .expect("owner read");
    assert_eq!(own.stories[0].view_count, Some(0));

    // A foreign read logs a view and hides the count.
    let foreign = stories::user_stories(&pool, viewer.id, owner.id)
        .await
        .expect("foreign read");
    assert_eq!(foreign.stories[0].view_count, None);

    // A repeat read stays a single logged view.
    stories::user_stories(&pool, viewer.id, owner.id)
        .await
        .expect("repeat read");
    let own = stories::user_stories(&pool, owner.id, owner.id)
        .await
        .expect("owner reread");
    assert_eq!(own.stories[0].view_count, Some(1));
}

#[sqlx::test(migrations = "../../../migrations")]
async fn only_the_owner_may_delete_a_story(pool: PgPool) {
    let owner = helpers::create_user(&pool, "so@example.com", "so").await;
    let stranger = helpers::create_user(&pool, "sx@example.com", "sx").await;
    let story = stories::create(&pool, owner.id, "https://cdn/so/1.jpg")
        .await
        .expect("create story");

    let foreign = stories::delete(&pool, stranger.id, story.story_id).await;
    assert!(matches!(foreign, Err(StoryError::NotOwner)));

    stories::delete(&pool, owner.id, story.story_id)
        .await
        .expect("owner delete");
    let missing = stories::delete(&pool, owner.id, story.story_id).await;
    assert!(matches!(missing, Err(StoryError::NotFound)));
}

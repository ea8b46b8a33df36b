use crate::api::album::error::AlbumError;
use crate::api::album::interfaces::{
    AlbumDetailResponse, AlbumListResponse, AlbumPostEntry, AlbumResponse, AlbumSelector,
    AlbumSummary,
};
use crate::database::album::Album;
use crate::database::album_store::AlbumStore;
use crate::database::post_store::PostStore;
use app_state::constants;
use sqlx::PgPool;
use tracing::instrument;

#[instrument(skip(pool))]
pub async fn create(
    pool: &PgPool,
    user_id: i64,
    title: &str,
) -> Result<AlbumResponse, AlbumError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AlbumError::InvalidInput("Title cannot be blank.".to_owned()));
    }
    if AlbumStore::exists_by_owner_and_title(pool, user_id, title).await? {
        return Err(AlbumError::AlreadyExists);
    }
    let album = AlbumStore::insert(pool, user_id, title).await?;
    Ok(AlbumResponse {
        album_id: album.id,
        title: album.title,
        created_at: album.created_at,
    })
}

/// The caller's albums. When unassigned posts exist, the derived
/// pseudo-album is prepended with a live count and thumbnail.
#[instrument(skip(pool))]
pub async fn list_mine(pool: &PgPool, user_id: i64) -> Result<AlbumListResponse, AlbumError> {
    let mut albums = Vec::new();

    let (unassigned_count, unassigned_thumbnail) =
        AlbumStore::unassigned_summary(pool, user_id).await?;
    if unassigned_count > 0 {
        albums.push(AlbumSummary {
            album_id: constants().album.unassigned_album_id,
            title: constants().album.unassigned_album_title.clone(),
            post_count: unassigned_count,
            thumbnail_image_url: unassigned_thumbnail,
        });
    }

    for row in AlbumStore::list_summaries_by_owner(pool, user_id).await? {
        albums.push(AlbumSummary {
            album_id: row.id,
            title: row.title,
            post_count: row.post_count,
            thumbnail_image_url: row.thumbnail_image_url,
        });
    }

    Ok(AlbumListResponse { albums })
}

/// Album detail. The sentinel id resolves to the live set of the
/// caller's unassigned posts instead of a stored row.
#[instrument(skip(pool))]
pub async fn detail(
    pool: &PgPool,
    user_id: i64,
    album_id: i64,
) -> Result<AlbumDetailResponse, AlbumError> {
    match AlbumSelector::from_id(album_id) {
        AlbumSelector::Unassigned => {
            let posts = AlbumStore::list_unassigned_posts(pool, user_id).await?;
            Ok(AlbumDetailResponse {
                album_id: constants().album.unassigned_album_id,
                title: constants().album.unassigned_album_title.clone(),
                posts: to_entries(posts),
            })
        }
        AlbumSelector::Real(id) => {
            let album = owned_album(pool, user_id, id).await?;
            let posts = AlbumStore::list_posts(pool, album.id).await?;
            Ok(AlbumDetailResponse {
                album_id: album.id,
                title: album.title,
                posts: to_entries(posts),
            })
        }
    }
}

/// Add-or-move: the post's album reference is overwritten, so moving
/// between albums is this one call. Adding a post already in the album
/// is a silent no-op.
#[instrument(skip(pool))]
pub async fn add_post(
    pool: &PgPool,
    user_id: i64,
    album_id: i64,
    post_id: i64,
) -> Result<(), AlbumError> {
    let album = owned_album(pool, user_id, album_id).await?;
    let post = PostStore::find_by_id(pool, post_id)
        .await?
        .ok_or(AlbumError::PostNotFound)?;
    if post.user_id != user_id {
        return Err(AlbumError::AccessDenied);
    }

    if post.album_id == Some(album.id) {
        return Ok(());
    }
    AlbumStore::set_post_album(pool, post.id, Some(album.id)).await?;
    Ok(())
}

/// Removing requires the post to currently sit in exactly this album.
#[instrument(skip(pool))]
pub async fn remove_post(
    pool: &PgPool,
    user_id: i64,
    album_id: i64,
    post_id: i64,
) -> Result<(), AlbumError> {
    let album = owned_album(pool, user_id, album_id).await?;
    let post = PostStore::find_by_id(pool, post_id)
        .await?
        .ok_or(AlbumError::PostNotFound)?;
    if post.user_id != user_id {
        return Err(AlbumError::AccessDenied);
    }
    if post.album_id != Some(album.id) {
        return Err(AlbumError::PostNotInAlbum);
    }

    AlbumStore::set_post_album(pool, post.id, None).await?;
    Ok(())
}

#[instrument(skip(pool))]
pub async fn update_title(
    pool: &PgPool,
    user_id: i64,
    album_id: i64,
    title: &str,
) -> Result<(), AlbumError> {
    let album = owned_album(pool, user_id, album_id).await?;
    let title = title.trim();
    if title.is_empty() {
        return Err(AlbumError::InvalidInput("Title cannot be blank.".to_owned()));
    }
    if title != album.title && AlbumStore::exists_by_owner_and_title(pool, user_id, title).await? {
        return Err(AlbumError::AlreadyExists);
    }

    AlbumStore::update_title(pool, album.id, title).await?;
    Ok(())
}

/// Deleting an album never deletes content: posts are detached first,
/// then the album row goes.
#[instrument(skip(pool))]
pub async fn delete(pool: &PgPool, user_id: i64, album_id: i64) -> Result<(), AlbumError> {
    let album = owned_album(pool, user_id, album_id).await?;

    let mut tx = pool.begin().await?;
    AlbumStore::detach_all_posts(&mut *tx, album.id).await?;
    AlbumStore::delete(&mut *tx, album.id).await?;
    tx.commit().await?;
    Ok(())
}

async fn owned_album(pool: &PgPool, user_id: i64, album_id: i64) -> Result<Album, AlbumError> {
    let album = AlbumStore::find_by_id(pool, album_id)
        .await?
        .ok_or(AlbumError::NotFound)?;
    if album.user_id != user_id {
        return Err(AlbumError::AccessDenied);
    }
    Ok(album)
}

fn to_entries(
    posts: Vec<crate::database::album::AlbumPostRow>,
) -> Vec<AlbumPostEntry> {
    posts
        .into_iter()
        .map(|row| AlbumPostEntry {
            post_id: row.post_id,
            image_url: row.image_url,
            like_count: row.like_count,
            comment_count: row.comment_count,
        })
        .collect()
}

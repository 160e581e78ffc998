//! Database access layer for fanboard-server
//!
//! All like counts and per-requester like flags are computed at query time;
//! nothing derived is persisted.

use chrono::Utc;
use fanboard_common::db::models::ArtistWithLikes;
use fanboard_common::{Error, Result};
use sqlx::SqlitePool;

const ARTIST_WITH_LIKES_SELECT: &str = r#"
    SELECT a.id, a.name, a.image, a.created_at, a.updated_at,
           (SELECT COUNT(*) FROM user_likes l WHERE l.artist_id = a.id) AS likes,
           EXISTS(
               SELECT 1 FROM user_likes l
               WHERE l.artist_id = a.id AND l.user_id = ?
           ) AS has_liked
    FROM artists a
"#;

/// Fetch every artist enriched with its like count and the requester's
/// like status, ordered by id.
pub async fn list_artists_with_likes(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<ArtistWithLikes>> {
    let sql = format!("{} ORDER BY a.id", ARTIST_WITH_LIKES_SELECT);
    let artists = sqlx::query_as::<_, ArtistWithLikes>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;
    Ok(artists)
}

/// Fetch a single artist enriched for the requester, or None if the id
/// does not resolve.
pub async fn get_artist_with_likes(
    pool: &SqlitePool,
    artist_id: i64,
    user_id: &str,
) -> Result<Option<ArtistWithLikes>> {
    let sql = format!("{} WHERE a.id = ?", ARTIST_WITH_LIKES_SELECT);
    let artist = sqlx::query_as::<_, ArtistWithLikes>(&sql)
        .bind(user_id)
        .bind(artist_id)
        .fetch_optional(pool)
        .await?;
    Ok(artist)
}

/// Does a like relationship exist for this (user, artist) pair?
pub async fn has_liked(pool: &SqlitePool, user_id: &str, artist_id: i64) -> Result<bool> {
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM user_likes WHERE user_id = ? AND artist_id = ?)",
    )
    .bind(user_id)
    .bind(artist_id)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

/// Create a like relationship.
///
/// Concurrent duplicate likes race at the store; the loser's unique
/// violation is mapped to Conflict here.
pub async fn insert_like(pool: &SqlitePool, user_id: &str, artist_id: i64) -> Result<()> {
    let result = sqlx::query(
        "INSERT INTO user_likes (user_id, artist_id, created_at) VALUES (?, ?, ?)",
    )
    .bind(user_id)
    .bind(artist_id)
    .bind(Utc::now())
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(e)) if e.kind() == sqlx::error::ErrorKind::UniqueViolation => {
            Err(Error::Conflict("Already liked this artist".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete a like relationship. Returns false if no row existed.
pub async fn delete_like(pool: &SqlitePool, user_id: &str, artist_id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM user_likes WHERE user_id = ? AND artist_id = ?")
        .bind(user_id)
        .bind(artist_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

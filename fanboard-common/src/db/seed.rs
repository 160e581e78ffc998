//! Starter roster inserted on first run

use crate::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

/// Starter artists, inserted when the artists table is empty
const STARTER_ARTISTS: &[(&str, &str)] = &[
    ("Drake", "/drake.avif?height=400&width=400"),
    ("Taylor Swift", "/swift.avif?height=400&width=400"),
    ("Ed Sheeran", "/sheeran.avif?height=400&width=400"),
    ("The Weeknd", "/weeknd.jpeg?height=400&width=400"),
    ("Billie Eilish", "/eilish.jpg?height=400&width=400"),
    ("Adele", "/adele.webp?height=400&width=400"),
];

/// Seed the artists table if it is empty. Idempotent: a populated table is
/// left untouched. Returns the number of rows inserted.
pub async fn seed_artists(pool: &SqlitePool) -> Result<usize> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artists")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(0);
    }

    let now = Utc::now();
    for (name, image) in STARTER_ARTISTS {
        sqlx::query(
            "INSERT INTO artists (name, image, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(name)
        .bind(image)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
    }

    info!("Seeded {} starter artists", STARTER_ARTISTS.len());
    Ok(STARTER_ARTISTS.len())
}

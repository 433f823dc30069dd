//! Database access layer for tunebase
//!
//! One query module per entity; all queries are parameterized and run
//! against the shared connection pool.

use anyhow::Result;
use sqlx::SqlitePool;
use std::path::Path;

pub mod albums;
pub mod artists;
pub mod genres;
pub mod guestbook;
pub mod playlists;
pub mod recommend;
pub mod songs;
pub mod users;

/// Initialize database connection pool
///
/// Opens (or creates) the SQLite file and bootstraps the schema.
pub async fn connect(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // mode=rwc: read, write, create
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    tracing::debug!("Connecting to database: {}", db_url);

    let pool = SqlitePool::connect(&db_url).await?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// Create catalog tables if they don't exist
///
/// Identifier columns are TEXT; legacy datasets pad them with whitespace,
/// which the recommendation queries work around with TRIM.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            song_id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            genre TEXT,
            duration_seconds INTEGER
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            artist_id TEXT PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS albums (
            album_id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            artist_id TEXT NOT NULL,
            genre TEXT,
            release_year INTEGER
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS genres (
            genre_id TEXT PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS playlists (
            playlist_id TEXT PRIMARY KEY,
            title TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS users (
            user_id TEXT PRIMARY KEY,
            user_name TEXT UNIQUE NOT NULL,
            password TEXT NOT NULL,
            email TEXT
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS album_songs (
            album_id TEXT NOT NULL,
            song_id TEXT NOT NULL,
            PRIMARY KEY (album_id, song_id)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS playlist_songs (
            playlist_id TEXT NOT NULL,
            song_id TEXT NOT NULL,
            PRIMARY KEY (playlist_id, song_id)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS artist_genres (
            artist_id TEXT NOT NULL,
            genre_id TEXT NOT NULL,
            PRIMARY KEY (artist_id, genre_id)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS follows (
            user_id TEXT NOT NULL,
            artist_id TEXT NOT NULL,
            follow_date TEXT,
            PRIMARY KEY (user_id, artist_id)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS listens (
            user_id TEXT NOT NULL,
            song_id TEXT NOT NULL,
            PRIMARY KEY (user_id, song_id)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS playlist_users (
            user_id TEXT NOT NULL,
            playlist_id TEXT NOT NULL,
            created INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (user_id, playlist_id)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS guestbook (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    ];

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Database schema initialized");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_schema_idempotent() {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        init_schema(&pool).await.expect("First init failed");
        init_schema(&pool).await.expect("Second init failed");

        // All tables queryable after bootstrap
        for table in [
            "songs",
            "artists",
            "albums",
            "genres",
            "playlists",
            "users",
            "album_songs",
            "playlist_songs",
            "artist_genres",
            "follows",
            "listens",
            "playlist_users",
            "guestbook",
        ] {
            let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
                .fetch_one(&pool)
                .await
                .unwrap_or_else(|e| panic!("Table {} missing: {}", table, e));
            assert_eq!(count, 0);
        }
    }
}

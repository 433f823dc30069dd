//! Playlist queries

use sqlx::{Row, SqlitePool};

use super::users::User;

/// Playlist record
#[derive(Debug, Clone)]
pub struct Playlist {
    pub playlist_id: String,
    pub title: String,
}

fn playlist_from_row(row: &sqlx::sqlite::SqliteRow) -> Playlist {
    Playlist {
        playlist_id: row.get("playlist_id"),
        title: row.get("title"),
    }
}

/// Find playlists by title substring (case-insensitive)
pub async fn search_by_title(pool: &SqlitePool, title: &str) -> Result<Vec<Playlist>, sqlx::Error> {
    let rows = sqlx::query("SELECT playlist_id, title FROM playlists WHERE title LIKE ?")
        .bind(format!("%{}%", title))
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(playlist_from_row).collect())
}

/// Load one playlist by id
pub async fn get(pool: &SqlitePool, playlist_id: &str) -> Result<Option<Playlist>, sqlx::Error> {
    let row = sqlx::query("SELECT playlist_id, title FROM playlists WHERE playlist_id = ?")
        .bind(playlist_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| playlist_from_row(&row)))
}

/// Playlists containing a song
pub async fn containing_song(
    pool: &SqlitePool,
    song_id: &str,
) -> Result<Vec<Playlist>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.playlist_id, p.title
        FROM playlists p
        JOIN playlist_songs ps ON p.playlist_id = ps.playlist_id
        WHERE ps.song_id = ?
        "#,
    )
    .bind(song_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(playlist_from_row).collect())
}

/// The user who created the playlist
pub async fn creator(pool: &SqlitePool, playlist_id: &str) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT u.user_id, u.user_name, u.password, u.email
        FROM users u
        JOIN playlist_users pu ON u.user_id = pu.user_id
        WHERE pu.playlist_id = ? AND pu.created = 1
        "#,
    )
    .bind(playlist_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| super::users::user_from_row(&row)))
}

/// Users following (not having created) the playlist
pub async fn followers(pool: &SqlitePool, playlist_id: &str) -> Result<Vec<User>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT u.user_id, u.user_name, u.password, u.email
        FROM users u
        JOIN playlist_users pu ON u.user_id = pu.user_id
        WHERE pu.playlist_id = ? AND pu.created = 0
        "#,
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(super::users::user_from_row).collect())
}

/// Playlists a user created (`created = 1`) or follows (`created = 0`)
pub async fn by_user(
    pool: &SqlitePool,
    user_id: &str,
    created: bool,
) -> Result<Vec<Playlist>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.playlist_id, p.title
        FROM playlists p
        JOIN playlist_users pu ON p.playlist_id = pu.playlist_id
        WHERE pu.user_id = ? AND pu.created = ?
        "#,
    )
    .bind(user_id)
    .bind(created as i64)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(playlist_from_row).collect())
}

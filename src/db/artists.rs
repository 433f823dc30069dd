//! Artist queries

use sqlx::{Row, SqlitePool};

use super::genres::Genre;

/// Artist record
#[derive(Debug, Clone)]
pub struct Artist {
    pub artist_id: String,
    pub name: String,
}

/// Artist a user follows, with the follow date
#[derive(Debug, Clone)]
pub struct FollowedArtist {
    pub artist: Artist,
    pub follow_date: Option<String>,
}

fn artist_from_row(row: &sqlx::sqlite::SqliteRow) -> Artist {
    Artist {
        artist_id: row.get("artist_id"),
        name: row.get("name"),
    }
}

/// Find artists by name substring
pub async fn search_by_name(pool: &SqlitePool, name: &str) -> Result<Vec<Artist>, sqlx::Error> {
    let rows = sqlx::query("SELECT artist_id, name FROM artists WHERE name LIKE ?")
        .bind(format!("%{}%", name))
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(artist_from_row).collect())
}

/// Load one artist by id
pub async fn get(pool: &SqlitePool, artist_id: &str) -> Result<Option<Artist>, sqlx::Error> {
    let row = sqlx::query("SELECT artist_id, name FROM artists WHERE artist_id = ?")
        .bind(artist_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| artist_from_row(&row)))
}

/// Genres an artist belongs to
pub async fn genres_of(pool: &SqlitePool, artist_id: &str) -> Result<Vec<Genre>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT g.genre_id, g.name
        FROM genres g
        JOIN artist_genres ag ON g.genre_id = ag.genre_id
        WHERE ag.artist_id = ?
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| Genre {
            genre_id: row.get("genre_id"),
            name: row.get("name"),
        })
        .collect())
}

/// Artists in a genre
pub async fn in_genre(pool: &SqlitePool, genre_id: &str) -> Result<Vec<Artist>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT a.artist_id, a.name
        FROM artists a
        JOIN artist_genres ag ON a.artist_id = ag.artist_id
        WHERE ag.genre_id = ?
        "#,
    )
    .bind(genre_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(artist_from_row).collect())
}

/// Artists a user follows, with follow dates
pub async fn followed_by(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<FollowedArtist>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT a.artist_id, a.name, f.follow_date
        FROM follows f
        JOIN artists a ON f.artist_id = a.artist_id
        WHERE f.user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| FollowedArtist {
            artist: artist_from_row(row),
            follow_date: row.get("follow_date"),
        })
        .collect())
}

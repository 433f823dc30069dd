//! Recommendation queries
//!
//! Derives a user's followed genres/artists and suggests catalog entries not
//! already in their listening or follow history. Identifier and genre
//! columns in the legacy dataset carry whitespace padding, so joins and
//! filters here compare TRIMmed values.

use sqlx::{Row, SqlitePool};

use super::artists::Artist;
use super::playlists::Playlist;
use super::songs::Song;

/// Random-sample size per followed genre
pub const PER_GENRE_LIMIT: i64 = 5;

/// Recommended song with its artist's name
#[derive(Debug, Clone)]
pub struct RecommendedSong {
    pub song: Song,
    pub artist_name: String,
}

/// Resolve a username to its (trimmed) user id
pub async fn user_id_for(pool: &SqlitePool, username: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT TRIM(user_id) FROM users WHERE user_name = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Names of genres the user follows (via followed artists' genre links)
pub async fn followed_genre_names(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT DISTINCT TRIM(g.name)
        FROM follows f
        JOIN artist_genres ag ON TRIM(f.artist_id) = TRIM(ag.artist_id)
        JOIN genres g ON TRIM(ag.genre_id) = TRIM(g.genre_id)
        WHERE TRIM(f.user_id) = ?
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Ids of genres the user follows
pub async fn followed_genre_ids(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT DISTINCT TRIM(g.genre_id)
        FROM follows f
        JOIN artist_genres ag ON TRIM(f.artist_id) = TRIM(ag.artist_id)
        JOIN genres g ON TRIM(ag.genre_id) = TRIM(g.genre_id)
        WHERE TRIM(f.user_id) = ?
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Ids of artists the user follows
pub async fn followed_artist_ids(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT TRIM(artist_id) FROM follows WHERE TRIM(user_id) = ?")
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Random songs in a genre the user has not listened to yet
pub async fn songs_in_genre_unheard(
    pool: &SqlitePool,
    genre_name: &str,
    user_id: &str,
) -> Result<Vec<RecommendedSong>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT s.song_id, s.title, s.genre, s.duration_seconds,
               TRIM(a.name) AS artist_name
        FROM songs s
        JOIN album_songs als ON TRIM(s.song_id) = TRIM(als.song_id)
        JOIN albums al ON TRIM(als.album_id) = TRIM(al.album_id)
        JOIN artists a ON TRIM(al.artist_id) = TRIM(a.artist_id)
        WHERE TRIM(s.genre) = ?
          AND TRIM(s.song_id) NOT IN (
              SELECT TRIM(song_id) FROM listens WHERE TRIM(user_id) = ?
          )
        ORDER BY RANDOM()
        LIMIT ?
        "#,
    )
    .bind(genre_name)
    .bind(user_id)
    .bind(PER_GENRE_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| RecommendedSong {
            song: Song {
                song_id: row.get("song_id"),
                title: row.get("title"),
                genre: row.get("genre"),
                duration_seconds: row.get("duration_seconds"),
            },
            artist_name: row.get("artist_name"),
        })
        .collect())
}

/// Artists in a genre the user does not follow yet
pub async fn artists_in_genre_unfollowed(
    pool: &SqlitePool,
    genre_id: &str,
    user_id: &str,
) -> Result<Vec<Artist>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT DISTINCT a.artist_id, a.name
        FROM artists a
        JOIN artist_genres ag ON TRIM(a.artist_id) = TRIM(ag.artist_id)
        WHERE TRIM(ag.genre_id) = ?
          AND NOT EXISTS (
              SELECT 1 FROM follows f
              WHERE TRIM(f.artist_id) = TRIM(a.artist_id)
                AND TRIM(f.user_id) = ?
          )
        LIMIT ?
        "#,
    )
    .bind(genre_id)
    .bind(user_id)
    .bind(PER_GENRE_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| Artist {
            artist_id: row.get("artist_id"),
            name: row.get("name"),
        })
        .collect())
}

/// Playlists containing songs by artists the user follows
pub async fn playlists_with_followed_artists(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<Playlist>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT DISTINCT p.playlist_id, p.title
        FROM playlists p
        JOIN playlist_songs ps ON TRIM(p.playlist_id) = TRIM(ps.playlist_id)
        JOIN album_songs als ON TRIM(ps.song_id) = TRIM(als.song_id)
        JOIN albums al ON TRIM(als.album_id) = TRIM(al.album_id)
        JOIN follows f ON TRIM(al.artist_id) = TRIM(f.artist_id)
        WHERE TRIM(f.user_id) = ?
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| Playlist {
            playlist_id: row.get("playlist_id"),
            title: row.get("title"),
        })
        .collect())
}

//! Song queries

use sqlx::{Row, SqlitePool};

/// Song record
#[derive(Debug, Clone)]
pub struct Song {
    pub song_id: String,
    pub title: String,
    pub genre: Option<String>,
    pub duration_seconds: Option<i64>,
}

/// Song search hit joined with its album and artist
#[derive(Debug, Clone)]
pub struct SongHit {
    pub song: Song,
    pub artist_id: String,
    pub artist_name: String,
    pub album_id: String,
    pub album_title: String,
    pub album_genre: Option<String>,
}

fn song_from_row(row: &sqlx::sqlite::SqliteRow) -> Song {
    Song {
        song_id: row.get("song_id"),
        title: row.get("title"),
        genre: row.get("genre"),
        duration_seconds: row.get("duration_seconds"),
    }
}

/// Find songs by id or exact title, joined with album and artist
pub async fn search(
    pool: &SqlitePool,
    song_id: Option<&str>,
    title: Option<&str>,
) -> Result<Vec<SongHit>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT s.song_id, s.title, s.genre, s.duration_seconds,
               a.artist_id, a.name AS artist_name,
               al.album_id, al.title AS album_title, al.genre AS album_genre
        FROM songs s
        JOIN album_songs als ON s.song_id = als.song_id
        JOIN albums al ON als.album_id = al.album_id
        JOIN artists a ON al.artist_id = a.artist_id
        WHERE s.song_id = ? OR s.title = ?
        "#,
    )
    .bind(song_id)
    .bind(title)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| SongHit {
            song: song_from_row(row),
            artist_id: row.get("artist_id"),
            artist_name: row.get("artist_name"),
            album_id: row.get("album_id"),
            album_title: row.get("album_title"),
            album_genre: row.get("album_genre"),
        })
        .collect())
}

/// Songs on an album
pub async fn in_album(pool: &SqlitePool, album_id: &str) -> Result<Vec<Song>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT s.song_id, s.title, s.genre, s.duration_seconds
        FROM songs s
        JOIN album_songs als ON s.song_id = als.song_id
        WHERE als.album_id = ?
        "#,
    )
    .bind(album_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_from_row).collect())
}

/// Songs in a playlist
pub async fn in_playlist(pool: &SqlitePool, playlist_id: &str) -> Result<Vec<Song>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT s.song_id, s.title, s.genre, s.duration_seconds
        FROM songs s
        JOIN playlist_songs ps ON s.song_id = ps.song_id
        WHERE ps.playlist_id = ?
        "#,
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_from_row).collect())
}

/// Songs released on any of an artist's albums
pub async fn by_artist(pool: &SqlitePool, artist_id: &str) -> Result<Vec<Song>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT s.song_id, s.title, s.genre, s.duration_seconds
        FROM songs s
        JOIN album_songs als ON s.song_id = als.song_id
        JOIN albums al ON als.album_id = al.album_id
        WHERE al.artist_id = ?
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_from_row).collect())
}

/// Songs on albums whose genre matches the named genre
pub async fn in_genre(pool: &SqlitePool, genre_id: &str) -> Result<Vec<Song>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT s.song_id, s.title, s.genre, s.duration_seconds
        FROM songs s
        JOIN album_songs als ON s.song_id = als.song_id
        JOIN albums al ON als.album_id = al.album_id
        WHERE al.genre = (SELECT name FROM genres WHERE genre_id = ?)
        "#,
    )
    .bind(genre_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_from_row).collect())
}

/// Songs in a user's listening history
pub async fn listened_by(pool: &SqlitePool, user_id: &str) -> Result<Vec<Song>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT s.song_id, s.title, s.genre, s.duration_seconds
        FROM songs s
        JOIN listens l ON s.song_id = l.song_id
        WHERE l.user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_from_row).collect())
}

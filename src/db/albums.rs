//! Album queries

use sqlx::{Row, SqlitePool};

/// Album record
#[derive(Debug, Clone)]
pub struct Album {
    pub album_id: String,
    pub title: String,
    pub artist_id: String,
    pub genre: Option<String>,
    pub release_year: Option<i64>,
}

/// Album search hit with its artist's name
#[derive(Debug, Clone)]
pub struct AlbumHit {
    pub album: Album,
    pub artist_name: String,
}

/// Album detail row: album, artist, and the artist's genre
#[derive(Debug, Clone)]
pub struct AlbumDetails {
    pub album: Album,
    pub artist_name: String,
    pub genre_name: Option<String>,
}

fn album_from_row(row: &sqlx::sqlite::SqliteRow) -> Album {
    Album {
        album_id: row.get("album_id"),
        title: row.get("title"),
        artist_id: row.get("artist_id"),
        genre: row.get("genre"),
        release_year: row.get("release_year"),
    }
}

/// Find albums by exact title, with artist names
pub async fn search_by_title(pool: &SqlitePool, title: &str) -> Result<Vec<AlbumHit>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT al.album_id, al.title, al.artist_id, al.genre, al.release_year,
               a.name AS artist_name
        FROM albums al
        JOIN artists a ON al.artist_id = a.artist_id
        WHERE al.title = ?
        "#,
    )
    .bind(title)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| AlbumHit {
            album: album_from_row(row),
            artist_name: row.get("artist_name"),
        })
        .collect())
}

/// Load one album with artist and the artist's genre
///
/// The genre join is optional: an artist without a genre association still
/// yields the album row.
pub async fn details(pool: &SqlitePool, album_id: &str) -> Result<Option<AlbumDetails>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT al.album_id, al.title, al.artist_id, al.genre, al.release_year,
               a.name AS artist_name, g.name AS genre_name
        FROM albums al
        JOIN artists a ON al.artist_id = a.artist_id
        LEFT JOIN artist_genres ag ON a.artist_id = ag.artist_id
        LEFT JOIN genres g ON ag.genre_id = g.genre_id
        WHERE al.album_id = ?
        "#,
    )
    .bind(album_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| AlbumDetails {
        album: album_from_row(&row),
        artist_name: row.get("artist_name"),
        genre_name: row.get("genre_name"),
    }))
}

/// Albums by an artist
pub async fn by_artist(pool: &SqlitePool, artist_id: &str) -> Result<Vec<Album>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT album_id, title, artist_id, genre, release_year
        FROM albums
        WHERE artist_id = ?
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(album_from_row).collect())
}

/// Albums whose genre column matches the named genre
pub async fn in_genre(pool: &SqlitePool, genre_id: &str) -> Result<Vec<Album>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT album_id, title, artist_id, genre, release_year
        FROM albums
        WHERE genre = (SELECT name FROM genres WHERE genre_id = ?)
        "#,
    )
    .bind(genre_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(album_from_row).collect())
}

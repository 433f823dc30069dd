//! Genre queries

use sqlx::{Row, SqlitePool};

/// Genre record
#[derive(Debug, Clone)]
pub struct Genre {
    pub genre_id: String,
    pub name: String,
}

fn genre_from_row(row: &sqlx::sqlite::SqliteRow) -> Genre {
    Genre {
        genre_id: row.get("genre_id"),
        name: row.get("name"),
    }
}

/// Find genres by name substring (SQLite LIKE is case-insensitive for ASCII)
pub async fn search_by_name(pool: &SqlitePool, name: &str) -> Result<Vec<Genre>, sqlx::Error> {
    let rows = sqlx::query("SELECT genre_id, name FROM genres WHERE name LIKE ?")
        .bind(format!("%{}%", name))
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(genre_from_row).collect())
}

/// Load one genre by id
pub async fn get(pool: &SqlitePool, genre_id: &str) -> Result<Option<Genre>, sqlx::Error> {
    let row = sqlx::query("SELECT genre_id, name FROM genres WHERE genre_id = ?")
        .bind(genre_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| genre_from_row(&row)))
}

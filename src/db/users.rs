//! User queries

use sqlx::{Row, SqlitePool};

/// User record
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: String,
    pub user_name: String,
    pub password: String,
    pub email: Option<String>,
}

pub(crate) fn user_from_row(row: &sqlx::sqlite::SqliteRow) -> User {
    User {
        user_id: row.get("user_id"),
        user_name: row.get("user_name"),
        password: row.get("password"),
        email: row.get("email"),
    }
}

/// Load one user by username
pub async fn find_by_name(pool: &SqlitePool, username: &str) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query("SELECT user_id, user_name, password, email FROM users WHERE user_name = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| user_from_row(&row)))
}

/// Check username/password against the users table
///
/// Passwords are stored and compared in plaintext; this mirrors the legacy
/// dataset and is not an authentication scheme to imitate.
pub async fn authenticate(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT user_id, user_name, password, email FROM users WHERE user_name = ? AND password = ?",
    )
    .bind(username)
    .bind(password)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| user_from_row(&row)))
}

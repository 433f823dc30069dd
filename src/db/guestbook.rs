//! Guestbook queries (demo table behind `/` and `/add`)

use sqlx::{Row, SqlitePool};

/// All guestbook names, oldest first
pub async fn list_names(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    let rows = sqlx::query("SELECT name FROM guestbook ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(|row| row.get("name")).collect())
}

/// Insert a guestbook entry
pub async fn add_name(pool: &SqlitePool, name: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO guestbook (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_list() {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");
        crate::db::init_schema(&pool).await.expect("Schema init failed");

        add_name(&pool, "grace hopper").await.expect("insert failed");
        add_name(&pool, "alan turing").await.expect("insert failed");

        let names = list_names(&pool).await.expect("list failed");
        assert_eq!(names, vec!["grace hopper", "alan turing"]);
    }
}

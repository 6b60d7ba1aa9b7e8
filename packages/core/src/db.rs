//! SQLite connection pool and schema setup.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
)";

/// Open a pool for `database_url` and apply the schema.
///
/// In-memory databases exist per connection, so they get a single
/// connection that is never recycled.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(DEFAULT_MAX_CONNECTIONS)
    };

    let pool = pool_options.connect_with(options).await?;
    sqlx::query(SCHEMA).execute(&pool).await?;

    tracing::debug!("Database schema ready");
    Ok(pool)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:test?mode=memory"));
        assert!(!is_in_memory("sqlite://koreanit.db"));
    }

    #[tokio::test]
    async fn schema_is_applied_and_reapplicable() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        sqlx::query(SCHEMA).execute(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}

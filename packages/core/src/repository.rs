//! Data access for the server.
//!
//! [`UserRepository`] owns all SQLite reads and writes. Services talk to it
//! through the [`UserStore`] trait so they can be exercised against other
//! stores in tests. [`HelloRepository`] has no backing storage.

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use sqlx::{Row, SqlitePool};

/// Reply returned by the liveness probe.
pub const PING_REPLY: &str = "pong";

/// Storage-free source for the ping endpoint.
#[derive(Debug, Clone, Default)]
pub struct HelloRepository;

impl HelloRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn ping(&self) -> String {
        PING_REPLY.to_string()
    }
}

/// A single row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Round-trip a trivial query to prove the database answers.
    async fn find_one(&self) -> Result<i64, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error>;

    /// Insert a user. Fails with a unique-constraint violation when the
    /// username is taken.
    async fn insert(&self, username: &str) -> Result<User, sqlx::Error>;
}

/// Repository for reading and writing users in SQLite.
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_one(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query("SELECT id, username, created_at FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(User {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            created_at: row.try_get("created_at")?,
        }))
    }

    async fn insert(&self, username: &str) -> Result<User, sqlx::Error> {
        let created_at = Utc::now().to_rfc3339();

        let result = sqlx::query("INSERT INTO users (username, created_at) VALUES (?, ?)")
            .bind(username)
            .bind(&created_at)
            .execute(&self.pool)
            .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: username.to_string(),
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    async fn make_repo() -> UserRepository {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        UserRepository::new(pool)
    }

    #[test]
    fn hello_repository_replies_pong() {
        assert_eq!(HelloRepository::new().ping(), "pong");
    }

    #[tokio::test]
    async fn find_one_returns_one() {
        let repo = make_repo().await;
        assert_eq!(repo.find_one().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn insert_and_find_roundtrip() {
        let repo = make_repo().await;
        let created = repo.insert("alice").await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.username, "alice");

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn find_by_id_missing_returns_none() {
        let repo = make_repo().await;
        assert_eq!(repo.find_by_id(9999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_username_is_a_unique_violation() {
        let repo = make_repo().await;
        repo.insert("alice").await.unwrap();

        let err = repo.insert("alice").await.unwrap_err();
        let db_err = err.as_database_error().expect("database error");
        assert!(db_err.is_unique_violation());
    }

    #[tokio::test]
    async fn closed_pool_fails_find_one() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        pool.close().await;
        let repo = UserRepository::new(pool);
        assert!(repo.find_one().await.is_err());
    }
}

#![allow(dead_code)]

//! Shared fixtures for repository tests.

use todo_core::User;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// In-memory SQLite pool with the schema applied.
///
/// Capped at one connection: every `:memory:` connection is its own
/// database, so a larger pool would scatter the tables.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_user(email: &str) -> User {
    User::new(email.to_string(), Some("Test User".to_string()), "hash".to_string())
}

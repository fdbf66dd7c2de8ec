//! # Scholaris DB
//!
//! Database pool and utilities for the Scholaris API.
//!
//! This crate provides database connection pool initialization and management
//! using SQLx with PostgreSQL.
//!
//! # Example
//!
//! ```ignore
//! use scholaris_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = init_db_pool().await;
//!     // Use pool for database operations
//! }
//! ```

use std::env;

/// Initializes a PostgreSQL connection pool.
///
/// Reads the database URL from the `DATABASE_URL` environment variable and
/// creates a connection pool. The pool is cheaply cloneable and shared
/// through the application state.
///
/// # Panics
///
/// Panics if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
pub async fn init_db_pool() -> sqlx::PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    sqlx::PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;

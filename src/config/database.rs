//! PostgreSQL connection pool initialization.
//!
//! Reads the connection string from `DATABASE_URL`. The pool is created once
//! at startup, stored in the application state, and cheaply cloned into
//! handlers.

use std::env;

use sqlx::PgPool;

/// Connects to the database named by `DATABASE_URL`.
///
/// # Panics
///
/// Panics if the variable is unset or the connection cannot be established;
/// the server cannot do anything useful without its storage.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

//! Database operations for the Cartwheel `PostgreSQL` schema.
//!
//! ## Tables
//!
//! - `users` - Principal-name -> user-id directory (read-only here)
//! - `products` - Catalog collaborator (read-only here)
//! - `profiles` - One shipping profile per user
//! - `shopping_cart_items` - Per-user cart rows
//! - `orders` / `order_line_items` - Immutable checkout snapshots
//!
//! # Migrations
//!
//! Migrations live in `crates/server/migrations/` and are embedded via
//! [`MIGRATOR`]; the binary applies them at startup.

pub mod carts;
pub mod orders;
pub mod profiles;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use carts::PgCartStore;
pub use orders::PgOrderStore;
pub use profiles::PgProfileStore;
pub use users::PgUserStore;

/// Embedded migrations from `crates/server/migrations/`.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

//! Database module
//!
//! This module handles database connections, startup initialization, and
//! repositories.

pub mod connection;
pub mod repositories;

use mongodb::Database;

pub use connection::*;

use crate::{db::repositories::CounterRepository, error::AppResult};

/// Prepare the database for serving: seed the pid counter singleton when it
/// does not exist yet, so the first allocated pid is 0.
pub async fn init(db: &Database) -> AppResult<()> {
    CounterRepository::ensure_seeded(db).await
}

use anyhow::Context;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

pub const DATABASE_NAME: &str = "little_lemon";

pub async fn connect(database_url: &str) -> anyhow::Result<SqlitePool> {
    let db = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .with_context(|| format!("open {DATABASE_NAME} database at {database_url}"))?;
    tracing::debug!(%database_url, "database opened");
    Ok(db)
}

/// A private in-memory database. One connection that never expires, so every
/// query sees the same data.
pub async fn connect_in_memory() -> anyhow::Result<SqlitePool> {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .context("open in-memory database")?;
    Ok(db)
}

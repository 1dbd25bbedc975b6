//! Bobbi persistence layer: PostgreSQL pool management, entity models, and
//! repositories.
//!
//! Repositories return `Result<_, sqlx::Error>` so callers can distinguish a
//! failed lookup (the `Err` arm) from a successful lookup with no matching
//! row (`Ok(None)`). Access decisions depend on that distinction.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub mod models;
pub mod repositories;

/// Shared connection pool type used across the workspace.
pub type DbPool = PgPool;

/// Maximum number of connections in the pool.
const MAX_CONNECTIONS: u32 = 10;

/// Create a PostgreSQL connection pool for the given database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Verify the database is reachable by running a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from the embedded `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

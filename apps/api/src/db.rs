use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::{PgPoolOptions, Postgres};
use sqlx::pool::PoolOptions;
use sqlx::PgPool;
use tracing::info;

const MAX_CONNECTIONS: u32 = 10;

/// Pool settings for the catalog. Waiting for a free connection counts against
/// the same budget as the catalog read itself.
pub fn pool_options(acquire_timeout: Duration) -> PoolOptions<Postgres> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(acquire_timeout)
}

/// Creates and returns a PostgreSQL connection pool for the activity catalog.
pub async fn create_pool(database_url: &str, acquire_timeout: Duration) -> Result<PgPool> {
    info!(
        "Connecting to PostgreSQL (acquire timeout {}ms)...",
        acquire_timeout.as_millis()
    );

    let pool = pool_options(acquire_timeout).connect(database_url).await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

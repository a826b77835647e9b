use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::store_config::StoreConfig;

/// Connects to PostgreSQL and applies pending migrations.
///
/// # Errors
/// Returns error if DATABASE_URL is missing, the connection fails, or a
/// migration cannot be applied.
pub async fn init_database(config: &StoreConfig) -> anyhow::Result<PgPool> {
    let db_url = config
        .database_url
        .clone()
        .context("DATABASE_URL must be set for the postgres store")?;

    let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;
    run_migrations(&pool, &config.migrations_path)
        .await
        .with_context(|| format!("applying migrations from {}", config.migrations_path))?;
    Ok(pool)
}

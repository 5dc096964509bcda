use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::catalog_config::CatalogConfig;

/// Initialize database connection pool from environment variables and apply migrations
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or a migration fails
pub async fn init_database(catalog: &CatalogConfig) -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;
    run_migrations(&pool, &catalog.migrations_path)
        .await
        .with_context(|| format!("running migrations from {}", catalog.migrations_path))?;
    tracing::info!(migrations = %catalog.migrations_path, "database ready");
    Ok(pool)
}

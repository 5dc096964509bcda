use dotenvy::dotenv;

mod api;
mod config;
mod setup;
mod web;

use config::{app_config::AppConfig, catalog_config::StoreKind, database_config};
use setup::{
    dependency_injection::{DependencyContainer, Repositories},
    server::Server,
};

/// Product catalog entry point
///
/// Loads configuration, picks the store backend, wires dependencies and serves
/// the HTML pages together with the JSON API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize the store
    let repositories = match config.catalog.store {
        StoreKind::Postgres => {
            Repositories::postgres(database_config::init_database(&config.catalog).await?)
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory catalog store, data is lost on exit");
            Repositories::in_memory()
        }
    };

    // 5. Wire dependencies
    let container = DependencyContainer::new(repositories, &config.catalog).await?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}

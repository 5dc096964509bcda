use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::bail;

/// Backend holding the `products` and `categories` collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl std::str::FromStr for StoreKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            other => bail!("Invalid CATALOG_STORE: {other} (expected postgres or memory)"),
        }
    }
}

impl StoreKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKind::Postgres => "postgres",
            StoreKind::Memory => "memory",
        }
    }
}

/// Catalog settings: where photos live, which store to use, listing behaviour.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub uploads_path: PathBuf,
    pub store: StoreKind,
    pub migrations_path: String,
    pub seed_categories: bool,
    pub list_stream_delay: Duration,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - UPLOADS_PATH: Directory for uploaded photos (default: "./uploads")
    /// - CATALOG_STORE: "postgres" or "memory" (default: "postgres")
    /// - MIGRATIONS_PATH: SQL migrations directory (default: "./infrastructure/persistence/migrations")
    /// - SEED_CATEGORIES: Seed default categories into an empty store (default: true)
    /// - LIST_STREAM_DELAY_MS: Per-row delay of the data-driver listing (default: 1000)
    pub fn from_env() -> anyhow::Result<Self> {
        let store = env::var("CATALOG_STORE")
            .unwrap_or_else(|_| "postgres".to_string())
            .parse()?;

        Ok(Self {
            uploads_path: env::var("UPLOADS_PATH")
                .unwrap_or_else(|_| "./uploads".to_string())
                .into(),
            store,
            migrations_path: env::var("MIGRATIONS_PATH")
                .unwrap_or_else(|_| "./infrastructure/persistence/migrations".to_string()),
            seed_categories: env::var("SEED_CATEGORIES")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            list_stream_delay: Duration::from_millis(
                env::var("LIST_STREAM_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(1000),
            ),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_store_kind_case_insensitively() {
        assert_eq!("Memory".parse::<StoreKind>().unwrap(), StoreKind::Memory);
        assert_eq!(" postgres ".parse::<StoreKind>().unwrap(), StoreKind::Postgres);
        assert!("mongo".parse::<StoreKind>().is_err());
    }

    #[test]
    fn should_read_flags() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}

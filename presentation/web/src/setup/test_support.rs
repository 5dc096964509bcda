use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use bigdecimal::BigDecimal;
use chrono::Utc;
use poem::Route;
use poem::middleware::Cors;
use poem::test::TestClient;

use business::domain::category::model::Category;
use business::domain::product::model::Product;
use business::domain::product::services::ProductService;

use crate::config::catalog_config::{CatalogConfig, StoreKind};
use crate::setup::dependency_injection::{DependencyContainer, Repositories};
use crate::setup::server::Server;

pub const ELECTRONICS_ID: &str = "c-1";
/// The only origin allowed to call the JSON API in tests.
pub const API_ORIGIN: &str = "http://localhost:5173";

/// The whole application, CORS included, over the in-memory store and a private upload directory.
pub struct TestCatalog {
    pub client: TestClient<Route>,
    pub service: Arc<dyn ProductService>,
    pub uploads: PathBuf,
    ids: Vec<String>,
}

impl TestCatalog {
    pub async fn with_products(names: &[&str]) -> Self {
        let repositories = Repositories::in_memory();
        let electronics =
            Category::from_repository(ELECTRONICS_ID.to_string(), "Electronics".to_string());
        repositories
            .categories
            .save(electronics.clone())
            .await
            .unwrap();

        let mut ids = Vec::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            let product = Product::from_repository(
                format!("p-{i}"),
                name.to_string(),
                BigDecimal::from(100 + i as i64),
                Utc::now(),
                None,
                electronics.clone(),
            );
            ids.push(repositories.products.save(product).await.unwrap().id);
        }

        let config = CatalogConfig {
            uploads_path: std::env::temp_dir()
                .join(format!("catalog-web-{}", uuid::Uuid::new_v4())),
            store: StoreKind::Memory,
            migrations_path: String::new(),
            seed_categories: false,
            list_stream_delay: Duration::ZERO,
        };
        let container = DependencyContainer::new(repositories, &config)
            .await
            .unwrap();
        let service = container.web_state.service.clone();

        Self {
            client: TestClient::new(Server::routes(
                container,
                "http://localhost",
                Cors::new().allow_origin(API_ORIGIN),
            )),
            service,
            uploads: config.uploads_path,
            ids,
        }
    }

    /// Ids of the products the catalog was created with, in order.
    pub fn product_ids(&self) -> &[String] {
        &self.ids
    }
}

impl Drop for TestCatalog {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.uploads);
    }
}

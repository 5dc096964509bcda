use std::sync::Arc;

use anyhow::Context;
use sqlx::PgPool;

use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::memory::{CategoryRepositoryInMemory, ProductRepositoryInMemory};
use persistence::product::repository::ProductRepositoryPostgres;
use storage::filesystem::FilesystemPhotoStorage;

use business::application::category::seed::SeedCategoriesUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::service::ProductServiceImpl;
use business::application::product::submit::SubmitProductUseCaseImpl;
use business::domain::category::repository::CategoryRepository;
use business::domain::category::use_cases::seed::SeedCategoriesUseCase;
use business::domain::product::repository::ProductRepository;
use business::domain::product::services::{PhotoStorage, ProductService};

use crate::config::catalog_config::CatalogConfig;
use crate::web::routes::WebState;

/// Store adapters backing the catalog.
pub struct Repositories {
    pub products: Arc<dyn ProductRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            products: Arc::new(ProductRepositoryPostgres::new(pool.clone())),
            categories: Arc::new(CategoryRepositoryPostgres::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            products: Arc::new(ProductRepositoryInMemory::new()),
            categories: Arc::new(CategoryRepositoryInMemory::new()),
        }
    }
}

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub web_state: WebState,
}

impl DependencyContainer {
    pub async fn new(repositories: Repositories, catalog: &CatalogConfig) -> anyhow::Result<Self> {
        let health_api = crate::api::health::routes::Api::new(catalog.store.as_str());

        // Service layer
        let service: Arc<dyn ProductService> = Arc::new(ProductServiceImpl {
            product_repository: repositories.products,
            category_repository: repositories.categories,
            logger: Arc::new(TracingLogger::new("product_service")),
        });

        // Infrastructure adapters
        let photo_storage: Arc<dyn PhotoStorage> = Arc::new(
            FilesystemPhotoStorage::new(catalog.uploads_path.clone())
                .await
                .with_context(|| {
                    format!("preparing upload directory {}", catalog.uploads_path.display())
                })?,
        );

        if catalog.seed_categories {
            let seed = SeedCategoriesUseCaseImpl {
                service: service.clone(),
                logger: Arc::new(TracingLogger::new("seed_categories")),
            };
            seed.execute().await.context("seeding default categories")?;
        }

        // Product use cases
        let submit_use_case = Arc::new(SubmitProductUseCaseImpl {
            service: service.clone(),
            photo_storage: photo_storage.clone(),
            logger: Arc::new(TracingLogger::new("submit_product")),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            service: service.clone(),
            photo_storage: photo_storage.clone(),
            logger: Arc::new(TracingLogger::new("delete_product")),
        });

        let product_api = crate::api::product::routes::ProductApi::new(service.clone());

        let web_state = WebState {
            service,
            submit_use_case,
            delete_use_case,
            photo_storage,
            list_stream_delay: catalog.list_stream_delay,
        };

        Ok(Self {
            health_api,
            product_api,
            web_state,
        })
    }
}

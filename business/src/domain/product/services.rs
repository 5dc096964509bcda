use async_trait::async_trait;

use super::errors::{PhotoError, ProductError};
use super::model::Product;
use super::photo::PhotoName;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;

/// Catalog service mediating between the controllers and the repositories.
///
/// Lookups answer `Ok(None)` for a missing record; callers branch on presence.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, ProductError>;
    /// All products with their names in upper case.
    async fn find_all_with_name(&self) -> Result<Vec<Product>, ProductError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, ProductError>;
    async fn save(&self, product: Product) -> Result<Product, ProductError>;
    async fn delete(&self, product: &Product) -> Result<(), ProductError>;
    async fn find_all_categories(&self) -> Result<Vec<Category>, CategoryError>;
    async fn find_category_by_id(&self, id: &str) -> Result<Option<Category>, CategoryError>;
    async fn save_category(&self, category: Category) -> Result<Category, CategoryError>;
}

/// Storage port for uploaded product photos.
#[async_trait]
pub trait PhotoStorage: Send + Sync {
    async fn store(&self, name: &PhotoName, content: &[u8]) -> Result<(), PhotoError>;
    /// `Ok(None)` when no photo with that name exists.
    async fn load(&self, name: &PhotoName) -> Result<Option<Vec<u8>>, PhotoError>;
    async fn remove(&self, name: &PhotoName) -> Result<(), PhotoError>;
}

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError>;
    /// Inserts the product or replaces the whole record with the same id.
    async fn save(&self, product: Product) -> Result<Product, RepositoryError>;
    async fn delete(&self, product: &Product) -> Result<(), RepositoryError>;
}

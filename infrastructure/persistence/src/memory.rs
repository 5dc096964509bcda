//! In-process store used when `CATALOG_STORE=memory` and by HTTP-level tests.
//!
//! Records keep insertion order; saving an existing id replaces the record in place.

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::category::model::Category;
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

#[derive(Default)]
pub struct ProductRepositoryInMemory {
    products: RwLock<Vec<Product>>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => *slot = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(product)
    }

    async fn delete(&self, product: &Product) -> Result<(), RepositoryError> {
        self.products.write().await.retain(|p| p.id != product.id);
        Ok(())
    }
}

#[derive(Default)]
pub struct CategoryRepositoryInMemory {
    categories: RwLock<Vec<Category>>,
}

impl CategoryRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryInMemory {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.categories.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Category>, RepositoryError> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn save(&self, category: Category) -> Result<Category, RepositoryError> {
        let mut categories = self.categories.write().await;
        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => *slot = category.clone(),
            None => categories.push(category.clone()),
        }
        Ok(category)
    }

    async fn delete(&self, category: &Category) -> Result<(), RepositoryError> {
        self.categories
            .write()
            .await
            .retain(|c| c.id != category.id);
        Ok(())
    }
}

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Category>, RepositoryError>;
    async fn save(&self, category: Category) -> Result<Category, RepositoryError>;
    async fn delete(&self, category: &Category) -> Result<(), RepositoryError>;
}

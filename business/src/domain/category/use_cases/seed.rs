use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;

/// Categories saved on start-up when the store holds none.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Electronics", "Sports", "Computing", "Furniture"];

#[async_trait]
pub trait SeedCategoriesUseCase: Send + Sync {
    /// Returns the categories that were created; empty when the store was already seeded.
    async fn execute(&self) -> Result<Vec<Category>, CategoryError>;
}

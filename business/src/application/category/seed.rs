use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::use_cases::seed::{DEFAULT_CATEGORIES, SeedCategoriesUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::services::ProductService;

pub struct SeedCategoriesUseCaseImpl {
    pub service: Arc<dyn ProductService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SeedCategoriesUseCase for SeedCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Category>, CategoryError> {
        let existing = self.service.find_all_categories().await?;
        if !existing.is_empty() {
            self.logger.debug(&format!(
                "Skipping category seed, {} categories present",
                existing.len()
            ));
            return Ok(Vec::new());
        }

        let mut seeded = Vec::with_capacity(DEFAULT_CATEGORIES.len());
        for name in DEFAULT_CATEGORIES {
            let category = self.service.save_category(Category::new(name)?).await?;
            self.logger
                .info(&format!("Seeded category: {}", category.name));
            seeded.push(category);
        }
        Ok(seeded)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::photo::PhotoName;
use crate::domain::product::services::{PhotoStorage, ProductService};
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub service: Arc<dyn ProductService>,
    pub photo_storage: Arc<dyn PhotoStorage>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Verify product exists before deleting
        let product = self
            .service
            .find_by_id(&params.id)
            .await?
            .ok_or(ProductError::NotFound)?;

        self.service.delete(&product).await?;

        if let Some(photo) = product.photo.as_deref() {
            match PhotoName::parse(photo) {
                Ok(name) => {
                    if let Err(err) = self.photo_storage.remove(&name).await {
                        self.logger
                            .warn(&format!("Could not remove photo {}: {}", name, err));
                    }
                }
                Err(_) => self
                    .logger
                    .warn(&format!("Skipping invalid photo name: {}", photo)),
            }
        }

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// A file part received with the product form.
pub struct UploadedPhoto {
    /// Filename as sent by the client; empty when no file was chosen.
    pub filename: String,
    pub content: Vec<u8>,
}

pub struct SubmitProductParams {
    /// Set when an existing product is being edited.
    pub id: Option<String>,
    pub name: String,
    pub price: BigDecimal,
    pub create_at: Option<DateTime<Utc>>,
    pub category_id: String,
    pub photo: Option<UploadedPhoto>,
}

#[async_trait]
pub trait SubmitProductUseCase: Send + Sync {
    async fn execute(&self, params: SubmitProductParams) -> Result<Product, ProductError>;
}

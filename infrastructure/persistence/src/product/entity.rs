use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::category::model::Category;
use business::domain::product::model::Product;

/// A product row joined with the category it references.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub price: BigDecimal,
    pub create_at: DateTime<Utc>,
    pub photo: Option<String>,
    pub category_id: String,
    pub category_name: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.price,
            self.create_at,
            self.photo,
            Category::from_repository(self.category_id, self.category_name),
        )
    }
}

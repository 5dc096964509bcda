use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::ProductError;
use crate::domain::category::model::Category;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: BigDecimal,
    pub create_at: DateTime<Utc>,
    pub photo: Option<String>,
    pub category: Category,
}

pub struct NewProductProps {
    /// Keeps the identity of a product being replaced; a fresh id is generated when absent.
    pub id: Option<String>,
    pub name: String,
    pub price: BigDecimal,
    pub create_at: Option<DateTime<Utc>>,
    pub photo: Option<String>,
    pub category: Category,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.price < BigDecimal::zero() {
            return Err(ProductError::PriceNegative);
        }

        Ok(Self {
            id: props.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: props.name.trim().to_string(),
            price: props.price,
            create_at: props.create_at.unwrap_or_else(Utc::now),
            photo: props.photo,
            category: props.category,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: String,
        name: String,
        price: BigDecimal,
        create_at: DateTime<Utc>,
        photo: Option<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            name,
            price,
            create_at,
            photo,
            category,
        }
    }

    /// Same product with its name shown in upper case.
    pub fn with_uppercase_name(mut self) -> Self {
        self.name = self.name.to_uppercase();
        self
    }
}

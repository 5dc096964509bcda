use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use poem_openapi::Object;

use business::domain::category::model::Category;
use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    /// Category unique identifier
    pub id: String,
    /// Category name
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Creation timestamp
    pub create_at: DateTime<Utc>,
    /// Stored photo filename, served under `/uploads/img/{photo}`
    #[oai(skip_serializing_if_is_none)]
    pub photo: Option<String>,
    /// Category the product belongs to
    pub category: CategoryResponse,
}

/// JSON has no decimal type; prices without a finite `f64` form are sent as `0.0`.
fn price_as_f64(product: &Product) -> f64 {
    match product.price.to_f64().filter(|price| price.is_finite()) {
        Some(price) => price,
        None => {
            tracing::warn!(
                id = %product.id,
                price = %product.price,
                "price has no finite f64 form, sending 0.0"
            );
            0.0
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let price = price_as_f64(&product);
        Self {
            id: product.id,
            name: product.name,
            price,
            create_at: product.create_at,
            photo: product.photo,
            category: product.category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn product(price: &str) -> Product {
        Product::from_repository(
            "p-1".to_string(),
            "Apple iPod".to_string(),
            BigDecimal::from_str(price).unwrap(),
            Utc::now(),
            None,
            Category::from_repository("c-1".to_string(), "Electronics".to_string()),
        )
    }

    #[test]
    fn should_convert_price_and_category() {
        let response = ProductResponse::from(product("46.89"));

        assert!((response.price - 46.89).abs() < f64::EPSILON);
        assert_eq!(response.category.name, "Electronics");
        assert!(response.photo.is_none());
    }

    #[test]
    fn should_send_zero_for_price_beyond_f64_range() {
        let response = ProductResponse::from(product("1e400"));

        assert_eq!(response.price, 0.0);
        assert_eq!(response.name, "Apple iPod");
    }
}

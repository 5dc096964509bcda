use crate::domain::category::errors::CategoryError;
use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.not_found")]
    NotFound,
    #[error("product.category_not_found")]
    CategoryNotFound,
    #[error("photo.error")]
    Photo(#[from] PhotoError),
    #[error("category.error")]
    Category(#[from] CategoryError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    #[error("photo.invalid_name")]
    InvalidName,
    #[error("photo.storage_error")]
    Storage(#[source] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.name_empty")]
    NameEmpty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

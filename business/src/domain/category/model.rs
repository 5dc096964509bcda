use uuid::Uuid;

use super::errors::CategoryError;

/// Grouping entity referenced by every product.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(name: &str) -> Result<Self, CategoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CategoryError::NameEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: String, name: String) -> Self {
        Self { id, name }
    }
}

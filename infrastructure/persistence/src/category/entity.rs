use sqlx::FromRow;

use business::domain::category::model::Category;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: String,
    pub name: String,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category::from_repository(self.id, self.name)
    }
}

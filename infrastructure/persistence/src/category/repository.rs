use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::category::model::Category;
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;

use super::entity::CategoryEntity;
use crate::db::repository_error;

pub struct CategoryRepositoryPostgres {
    pool: PgPool,
}

impl CategoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let entities =
            sqlx::query_as::<_, CategoryEntity>("SELECT id, name FROM categories ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(repository_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Category>, RepositoryError> {
        let entity =
            sqlx::query_as::<_, CategoryEntity>("SELECT id, name FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(repository_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, category: Category) -> Result<Category, RepositoryError> {
        sqlx::query(
            r#"INSERT INTO categories (id, name) VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name"#,
        )
        .bind(&category.id)
        .bind(&category.name)
        .execute(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(category)
    }

    async fn delete(&self, category: &Category) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(&category.id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(())
    }
}

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use crate::db::repository_error;

const SELECT_PRODUCTS: &str = r#"SELECT p.id, p.name, p.price, p.create_at, p.photo,
        c.id AS category_id, c.name AS category_name
    FROM products p
    JOIN categories c ON c.id = p.category_id"#;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities =
            sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_PRODUCTS} ORDER BY p.create_at"))
                .fetch_all(&self.pool)
                .await
                .map_err(repository_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError> {
        let entity =
            sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_PRODUCTS} WHERE p.id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(repository_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, price, create_at, photo, category_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                price = EXCLUDED.price,
                create_at = EXCLUDED.create_at,
                photo = EXCLUDED.photo,
                category_id = EXCLUDED.category_id"#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.price)
        .bind(product.create_at)
        .bind(&product.photo)
        .bind(&product.category.id)
        .execute(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(product)
    }

    async fn delete(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(&product.id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(())
    }
}

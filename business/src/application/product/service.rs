use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ProductService;

pub struct ProductServiceImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn find_all(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.product_repository.find_all().await?;
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }

    async fn find_all_with_name(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.find_all().await?;
        Ok(products
            .into_iter()
            .map(Product::with_uppercase_name)
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, ProductError> {
        self.logger.info(&format!("Fetching product by id: {}", id));
        let product = self.product_repository.find_by_id(id).await?;
        if product.is_none() {
            self.logger.debug(&format!("No product with id: {}", id));
        }
        Ok(product)
    }

    async fn save(&self, product: Product) -> Result<Product, ProductError> {
        self.logger.info(&format!("Saving product: {}", product.id));
        let saved = self.product_repository.save(product).await?;
        Ok(saved)
    }

    async fn delete(&self, product: &Product) -> Result<(), ProductError> {
        self.logger.info(&format!("Deleting product: {}", product.id));
        self.product_repository.delete(product).await?;
        Ok(())
    }

    async fn find_all_categories(&self) -> Result<Vec<Category>, CategoryError> {
        self.logger.debug("Fetching all categories");
        Ok(self.category_repository.find_all().await?)
    }

    async fn find_category_by_id(&self, id: &str) -> Result<Option<Category>, CategoryError> {
        self.logger.debug(&format!("Fetching category by id: {}", id));
        Ok(self.category_repository.find_by_id(id).await?)
    }

    async fn save_category(&self, category: Category) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Saving category: {}", category.name));
        Ok(self.category_repository.save(category).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use proptest::prelude::*;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError>;
            async fn save(&self, product: Product) -> Result<Product, RepositoryError>;
            async fn delete(&self, product: &Product) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub CategoryRepo {}

        #[async_trait]
        impl CategoryRepository for CategoryRepo {
            async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;
            async fn find_by_id(&self, id: &str) -> Result<Option<Category>, RepositoryError>;
            async fn save(&self, category: Category) -> Result<Category, RepositoryError>;
            async fn delete(&self, category: &Category) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn electronics() -> Category {
        Category::from_repository("c-1".to_string(), "Electronics".to_string())
    }

    fn product(id: &str, name: &str) -> Product {
        Product::from_repository(
            id.to_string(),
            name.to_string(),
            BigDecimal::from(100),
            Utc::now(),
            None,
            electronics(),
        )
    }

    fn service(products: MockProductRepo, categories: MockCategoryRepo) -> ProductServiceImpl {
        ProductServiceImpl {
            product_repository: Arc::new(products),
            category_repository: Arc::new(categories),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_products_unchanged_from_find_all() {
        let mut products = MockProductRepo::new();
        products
            .expect_find_all()
            .returning(|| Ok(vec![product("p-1", "Sony Notebook")]));

        let result = service(products, MockCategoryRepo::new())
            .find_all()
            .await
            .unwrap();

        assert_eq!(result[0].name, "Sony Notebook");
    }

    #[tokio::test]
    async fn should_uppercase_names_in_find_all_with_name() {
        let mut products = MockProductRepo::new();
        products.expect_find_all().returning(|| {
            Ok(vec![
                product("p-1", "Apple iPod"),
                product("p-2", "mica chest of drawers"),
            ])
        });

        let result = service(products, MockCategoryRepo::new())
            .find_all_with_name()
            .await
            .unwrap();

        let names: Vec<_> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["APPLE IPOD", "MICA CHEST OF DRAWERS"]);
    }

    #[tokio::test]
    async fn should_return_none_when_product_is_missing() {
        let mut products = MockProductRepo::new();
        products
            .expect_find_by_id()
            .withf(|id: &str| id == "missing")
            .returning(|_| Ok(None));

        let result = service(products, MockCategoryRepo::new())
            .find_by_id("missing")
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_propagate_store_failure() {
        let mut products = MockProductRepo::new();
        products
            .expect_find_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let result = service(products, MockCategoryRepo::new()).find_all().await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_delegate_category_lookups() {
        let mut categories = MockCategoryRepo::new();
        categories
            .expect_find_by_id()
            .withf(|id: &str| id == "c-1")
            .returning(|_| Ok(Some(electronics())));
        categories
            .expect_find_all()
            .returning(|| Ok(vec![electronics()]));
        categories.expect_save().returning(Ok);

        let service = service(MockProductRepo::new(), categories);

        assert_eq!(
            service.find_category_by_id("c-1").await.unwrap(),
            Some(electronics())
        );
        assert_eq!(service.find_all_categories().await.unwrap().len(), 1);
        assert_eq!(
            service.save_category(electronics()).await.unwrap().name,
            "Electronics"
        );
    }

    proptest! {
        #[test]
        fn find_all_with_name_uppercases_any_name(names in proptest::collection::vec("\\PC{1,24}", 0..8)) {
            let stored: Vec<Product> = names
                .iter()
                .enumerate()
                .map(|(i, name)| product(&format!("p-{i}"), name))
                .collect();
            let mut products = MockProductRepo::new();
            products.expect_find_all().returning(move || Ok(stored.clone()));

            let runtime = tokio::runtime::Runtime::new().unwrap();
            let result = runtime
                .block_on(service(products, MockCategoryRepo::new()).find_all_with_name())
                .unwrap();

            prop_assert_eq!(result.len(), names.len());
            for (product, name) in result.iter().zip(&names) {
                prop_assert_eq!(&product.name, &name.to_uppercase());
            }
        }
    }
}

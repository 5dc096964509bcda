use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::photo::PhotoName;
use crate::domain::product::services::{PhotoStorage, ProductService};
use crate::domain::product::use_cases::submit::{SubmitProductParams, SubmitProductUseCase};

pub struct SubmitProductUseCaseImpl {
    pub service: Arc<dyn ProductService>,
    pub photo_storage: Arc<dyn PhotoStorage>,
    pub logger: Arc<dyn Logger>,
}

impl SubmitProductUseCaseImpl {
    async fn discard_photo(&self, name: &PhotoName) {
        if let Err(err) = self.photo_storage.remove(name).await {
            self.logger
                .warn(&format!("Could not remove photo {}: {}", name, err));
        }
    }
}

#[async_trait]
impl SubmitProductUseCase for SubmitProductUseCaseImpl {
    async fn execute(&self, params: SubmitProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Submitting product: {}", params.name));

        let existing = match params.id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => Some(
                self.service
                    .find_by_id(id)
                    .await?
                    .ok_or(ProductError::NotFound)?,
            ),
            None => None,
        };

        let category = self
            .service
            .find_category_by_id(&params.category_id)
            .await?
            .ok_or(ProductError::CategoryNotFound)?;

        let upload = params.photo.and_then(|photo| {
            PhotoName::for_upload(&photo.filename).map(|name| (name, photo.content))
        });
        let previous_photo = existing.as_ref().and_then(|p| p.photo.clone());

        let product = Product::new(NewProductProps {
            id: existing.as_ref().map(|p| p.id.clone()),
            name: params.name,
            price: params.price,
            create_at: params
                .create_at
                .or_else(|| existing.as_ref().map(|p| p.create_at)),
            photo: match &upload {
                Some((name, _)) => Some(name.to_string()),
                None => previous_photo.clone(),
            },
            category,
        })?;

        // A saved record never points at a missing photo.
        if let Some((name, content)) = &upload {
            self.photo_storage.store(name, content).await?;
        }

        let saved = match self.service.save(product).await {
            Ok(saved) => saved,
            Err(err) => {
                if let Some((name, _)) = &upload {
                    self.discard_photo(name).await;
                }
                return Err(err);
            }
        };

        if upload.is_some()
            && let Some(old) = previous_photo.and_then(|p| PhotoName::parse(&p).ok())
        {
            self.discard_photo(&old).await;
        }

        self.logger
            .info(&format!("Product saved with id: {}", saved.id));
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::errors::CategoryError;
    use crate::domain::category::model::Category;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::errors::PhotoError;
    use crate::domain::product::use_cases::submit::UploadedPhoto;
    use bigdecimal::BigDecimal;
    use chrono::{TimeZone, Utc};
    use mockall::{Sequence, mock};
    use std::sync::Mutex;

    mock! {
        pub Service {}

        #[async_trait]
        impl ProductService for Service {
            async fn find_all(&self) -> Result<Vec<Product>, ProductError>;
            async fn find_all_with_name(&self) -> Result<Vec<Product>, ProductError>;
            async fn find_by_id(&self, id: &str) -> Result<Option<Product>, ProductError>;
            async fn save(&self, product: Product) -> Result<Product, ProductError>;
            async fn delete(&self, product: &Product) -> Result<(), ProductError>;
            async fn find_all_categories(&self) -> Result<Vec<Category>, CategoryError>;
            async fn find_category_by_id(&self, id: &str) -> Result<Option<Category>, CategoryError>;
            async fn save_category(&self, category: Category) -> Result<Category, CategoryError>;
        }
    }

    mock! {
        pub Photos {}

        #[async_trait]
        impl PhotoStorage for Photos {
            async fn store(&self, name: &PhotoName, content: &[u8]) -> Result<(), PhotoError>;
            async fn load(&self, name: &PhotoName) -> Result<Option<Vec<u8>>, PhotoError>;
            async fn remove(&self, name: &PhotoName) -> Result<(), PhotoError>;
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

    fn sports() -> Category {
        Category::from_repository("c-2".to_string(), "Sports".to_string())
    }

    fn params(photo: Option<UploadedPhoto>) -> SubmitProductParams {
        SubmitProductParams {
            id: None,
            name: "Bianchi bicycle".to_string(),
            price: BigDecimal::from(70),
            create_at: None,
            category_id: "c-2".to_string(),
            photo,
        }
    }

    fn service_with_category() -> MockService {
        let mut service = MockService::new();
        service
            .expect_find_category_by_id()
            .withf(|id: &str| id == "c-2")
            .returning(|_| Ok(Some(sports())));
        service
    }

    fn use_case(service: MockService, photos: MockPhotos) -> SubmitProductUseCaseImpl {
        SubmitProductUseCaseImpl {
            service: Arc::new(service),
            photo_storage: Arc::new(photos),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_save_new_product_with_resolved_category_and_create_at() {
        let mut service = service_with_category();
        service.expect_save().times(1).returning(Ok);

        let product = use_case(service, MockPhotos::new())
            .execute(params(None))
            .await
            .unwrap();

        assert_eq!(product.category, sports());
        assert!(product.create_at <= Utc::now());
        assert!(product.photo.is_none());
    }

    #[tokio::test]
    async fn should_reject_unknown_category_without_saving() {
        let mut service = MockService::new();
        service
            .expect_find_category_by_id()
            .returning(|_| Ok(None));

        let result = use_case(service, MockPhotos::new())
            .execute(params(None))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::CategoryNotFound
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_editing_missing_product() {
        let mut service = MockService::new();
        service.expect_find_by_id().returning(|_| Ok(None));

        let result = use_case(service, MockPhotos::new())
            .execute(SubmitProductParams {
                id: Some("gone".to_string()),
                ..params(None)
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_store_upload_under_sanitized_name_before_saving() {
        let stored: Arc<Mutex<Option<(String, Vec<u8>)>>> = Arc::new(Mutex::new(None));
        let mut seq = Sequence::new();
        let mut photos = MockPhotos::new();
        let sink = stored.clone();
        photos
            .expect_store()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |name, content| {
                *sink.lock().unwrap() = Some((name.to_string(), content.to_vec()));
                Ok(())
            });
        let mut service = service_with_category();
        service
            .expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(Ok);

        let product = use_case(service, photos)
            .execute(params(Some(UploadedPhoto {
                filename: "my photo:1.png".to_string(),
                content: vec![1, 2, 3],
            })))
            .await
            .unwrap();

        let (name, content) = stored.lock().unwrap().clone().unwrap();
        assert!(name.ends_with("-myphoto1.png"));
        assert_eq!(product.photo.as_deref(), Some(name.as_str()));
        assert_eq!(content, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn should_ignore_file_part_without_filename() {
        let mut service = service_with_category();
        service.expect_save().returning(Ok);

        let product = use_case(service, MockPhotos::new())
            .execute(params(Some(UploadedPhoto {
                filename: String::new(),
                content: Vec::new(),
            })))
            .await
            .unwrap();

        assert!(product.photo.is_none());
    }

    #[tokio::test]
    async fn should_remove_written_photo_when_save_fails() {
        let mut photos = MockPhotos::new();
        photos.expect_store().returning(|_, _| Ok(()));
        photos.expect_remove().times(1).returning(|_| Ok(()));
        let mut service = service_with_category();
        service
            .expect_save()
            .returning(|_| Err(ProductError::Repository(RepositoryError::DatabaseError)));

        let result = use_case(service, photos)
            .execute(params(Some(UploadedPhoto {
                filename: "bike.jpg".to_string(),
                content: vec![9],
            })))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }

    #[tokio::test]
    async fn should_keep_identity_photo_and_create_at_when_editing() {
        let created = Utc.with_ymd_and_hms(2021, 3, 14, 0, 0, 0).unwrap();
        let mut service = service_with_category();
        service
            .expect_find_by_id()
            .withf(|id: &str| id == "p-1")
            .returning(move |_| {
                Ok(Some(Product::from_repository(
                    "p-1".to_string(),
                    "Old name".to_string(),
                    BigDecimal::from(50),
                    created,
                    Some("old.png".to_string()),
                    sports(),
                )))
            });
        service.expect_save().returning(Ok);

        let product = use_case(service, MockPhotos::new())
            .execute(SubmitProductParams {
                id: Some("p-1".to_string()),
                ..params(None)
            })
            .await
            .unwrap();

        assert_eq!(product.id, "p-1");
        assert_eq!(product.name, "Bianchi bicycle");
        assert_eq!(product.create_at, created);
        assert_eq!(product.photo.as_deref(), Some("old.png"));
    }
}

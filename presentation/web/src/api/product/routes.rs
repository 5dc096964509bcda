use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::errors::ProductError;
use business::domain::product::services::ProductService;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    service: Arc<dyn ProductService>,
}

impl ProductApi {
    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { service }
    }
}

/// Product catalog API
///
/// Read-only JSON views over the product catalog.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product with its name in upper case.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn index(&self) -> ListProductsResponse {
        match self.service.find_all_with_name().await {
            Ok(products) => {
                for product in &products {
                    tracing::debug!(name = %product.name, "listing product");
                }
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                ListProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns a single product by its unique identifier.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let result = self
            .service
            .find_by_id(&id.0)
            .await
            .and_then(|found| found.ok_or(ProductError::NotFound));

        match result {
            Ok(product) => {
                tracing::debug!(name = %product.name, "found product");
                GetProductByIdResponse::Ok(Json(product.into()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

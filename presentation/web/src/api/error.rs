use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every JSON endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error category, e.g. `NotFound`
    pub name: String,
    /// Code-style message, e.g. `product.not_found`
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

use std::sync::Arc;
use std::time::Duration;

use poem::error::{BadRequest, InternalServerError, NotFoundError};
use poem::http::header;
use poem::web::{Data, Html, Multipart, Path, Query, Redirect};
use poem::{Endpoint, EndpointExt, IntoResponse, Response, Route, get, handler};
use serde::Deserialize;

use business::domain::category::model::Category;
use business::domain::product::errors::{PhotoError, ProductError};
use business::domain::product::photo::PhotoName;
use business::domain::product::services::{PhotoStorage, ProductService};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::submit::SubmitProductUseCase;

use super::form::{self, FieldErrors, ProductForm};
use super::listing::{self, ListMode, ListPage};
use super::views::{self, Banner};

pub const LIST_SUCCESS: &str = "/list?success=success";
pub const LIST_NOT_FOUND: &str = "/list?error=the+product+does+not+exist";

const HTML: &str = "text/html; charset=utf-8";

#[derive(Clone)]
pub struct WebState {
    pub service: Arc<dyn ProductService>,
    pub submit_use_case: Arc<dyn SubmitProductUseCase>,
    pub delete_use_case: Arc<dyn DeleteProductUseCase>,
    pub photo_storage: Arc<dyn PhotoStorage>,
    pub list_stream_delay: Duration,
}

#[derive(Debug, Deserialize)]
struct ListParams {
    #[serde(default)]
    mode: ListMode,
    success: Option<String>,
    error: Option<String>,
}

pub fn routes(state: WebState) -> impl Endpoint {
    Route::new()
        .at("/", get(list))
        .at("/list", get(list))
        .at("/view/:id", get(view))
        .at("/form", get(create_form).post(save))
        .at("/form/:id", get(edit_form))
        .at("/form-v2/:id", get(edit_form))
        .at("/delete/:id", get(delete))
        .at("/uploads/img/:name", get(serve_photo))
        .data(state)
}

fn not_found_redirect() -> Response {
    Redirect::see_other(LIST_NOT_FOUND).into_response()
}

async fn categories(state: &WebState) -> poem::Result<Vec<Category>> {
    state
        .service
        .find_all_categories()
        .await
        .map_err(InternalServerError)
}

#[handler]
async fn list(
    Data(state): Data<&WebState>,
    Query(params): Query<ListParams>,
) -> poem::Result<Response> {
    let products = state
        .service
        .find_all_with_name()
        .await
        .map_err(InternalServerError)?;
    for product in &products {
        tracing::debug!(name = %product.name, "listing product");
    }

    let notice = match (params.error.as_deref(), params.success.as_deref()) {
        (Some(error), _) => Some(Banner::Error(error)),
        (None, Some(success)) => Some(Banner::Success(success)),
        (None, None) => None,
    };
    let page = ListPage {
        categories: categories(state).await?,
        banner: views::banner(notice),
    };

    let body = listing::render(params.mode, page, products, state.list_stream_delay);
    Ok(Response::builder().content_type(HTML).body(body))
}

#[handler]
async fn view(Data(state): Data<&WebState>, Path(id): Path<String>) -> poem::Result<Response> {
    let Some(product) = state
        .service
        .find_by_id(&id)
        .await
        .map_err(InternalServerError)?
    else {
        return Ok(not_found_redirect());
    };

    let categories = categories(state).await?;
    Ok(Html(views::product_detail(&product, &categories)).into_response())
}

async fn form_page(
    state: &WebState,
    title: &str,
    button: &str,
    form: &ProductForm,
    errors: &FieldErrors,
) -> poem::Result<Response> {
    let categories = categories(state).await?;
    Ok(Html(views::product_form(title, button, form, errors, &categories)).into_response())
}

#[handler]
async fn create_form(Data(state): Data<&WebState>) -> poem::Result<Response> {
    form_page(
        state,
        "form product",
        "Create",
        &ProductForm::default(),
        &FieldErrors::new(),
    )
    .await
}

/// Serves both `/form/{id}` and `/form-v2/{id}`.
#[handler]
async fn edit_form(Data(state): Data<&WebState>, Path(id): Path<String>) -> poem::Result<Response> {
    let Some(product) = state
        .service
        .find_by_id(&id)
        .await
        .map_err(InternalServerError)?
    else {
        return Ok(not_found_redirect());
    };

    tracing::debug!(name = %product.name, "editing product");
    form_page(
        state,
        "Edit product",
        "Edit",
        &ProductForm::from_product(&product),
        &FieldErrors::new(),
    )
    .await
}

#[handler]
async fn save(Data(state): Data<&WebState>, multipart: Multipart) -> poem::Result<Response> {
    let (form, upload) = form::read_submission(multipart).await?;

    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => return form_page(state, "Errors", "Save", &form, &errors).await,
    };

    match state.submit_use_case.execute(valid.into_params(upload)).await {
        Ok(product) => {
            tracing::info!(id = %product.id, "saved product");
            Ok(Redirect::see_other(LIST_SUCCESS).into_response())
        }
        Err(ProductError::CategoryNotFound) => {
            let mut errors = FieldErrors::new();
            errors.insert("category_id", "category does not exist");
            form_page(state, "Errors", "Save", &form, &errors).await
        }
        Err(ProductError::NotFound) => Ok(not_found_redirect()),
        Err(err) => Err(InternalServerError(err)),
    }
}

#[handler]
async fn delete(Data(state): Data<&WebState>, Path(id): Path<String>) -> poem::Result<Response> {
    match state
        .delete_use_case
        .execute(DeleteProductParams { id })
        .await
    {
        Ok(()) => Ok(Redirect::see_other(LIST_SUCCESS).into_response()),
        Err(ProductError::NotFound) => Ok(not_found_redirect()),
        Err(err) => Err(InternalServerError(err)),
    }
}

#[handler]
async fn serve_photo(Data(state): Data<&WebState>, Path(name): Path<String>) -> poem::Result<Response> {
    let name = PhotoName::parse(&name).map_err(BadRequest)?;

    match state.photo_storage.load(&name).await {
        Ok(Some(content)) => Ok(Response::builder()
            .content_type(content_type_for(&name))
            .header(
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{name}\""),
            )
            .body(content)),
        Ok(None) => Err(NotFoundError.into()),
        Err(PhotoError::InvalidName) => Err(BadRequest(PhotoError::InvalidName)),
        Err(err) => Err(InternalServerError(err)),
    }
}

fn content_type_for(name: &PhotoName) -> &'static str {
    match name.extension().as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

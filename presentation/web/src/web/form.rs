use std::collections::BTreeMap;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use num_traits::Zero;
use poem::error::BadRequest;
use poem::web::Multipart;

use business::domain::product::model::Product;
use business::domain::product::use_cases::submit::{SubmitProductParams, UploadedPhoto};

pub type FieldErrors = BTreeMap<&'static str, &'static str>;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw values of the product form, kept as typed so they can be redisplayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub id: String,
    pub name: String,
    pub price: String,
    pub create_at: String,
    pub category_id: String,
}

/// Form values that passed field validation.
#[derive(Debug)]
pub struct ValidForm {
    pub id: Option<String>,
    pub name: String,
    pub price: BigDecimal,
    pub create_at: Option<DateTime<Utc>>,
    pub category_id: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price.to_string(),
            create_at: product.create_at.format(DATE_FORMAT).to_string(),
            category_id: product.category.id.clone(),
        }
    }

    fn set(&mut self, field: &str, value: String) {
        match field {
            "id" => self.id = value,
            "name" => self.name = value,
            "price" => self.price = value,
            "create_at" => self.create_at = value,
            "category_id" | "category.id" => self.category_id = value,
            _ => {}
        }
    }

    pub fn validate(&self) -> Result<ValidForm, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name", "must not be empty");
        }

        let price = match self.price.trim() {
            "" => {
                errors.insert("price", "must not be empty");
                None
            }
            raw => match BigDecimal::from_str(raw) {
                Ok(price) if price < BigDecimal::zero() => {
                    errors.insert("price", "must not be negative");
                    None
                }
                Ok(price) => Some(price),
                Err(_) => {
                    errors.insert("price", "must be a number");
                    None
                }
            },
        };

        let category_id = self.category_id.trim();
        if category_id.is_empty() {
            errors.insert("category_id", "must not be empty");
        }

        let create_at = match self.create_at.trim() {
            "" => None,
            raw => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
                Ok(date) => date
                    .and_hms_opt(0, 0, 0)
                    .map(|at| Utc.from_utc_datetime(&at)),
                Err(_) => {
                    errors.insert("create_at", "must be a date (yyyy-MM-dd)");
                    None
                }
            },
        };

        match price {
            Some(price) if errors.is_empty() => Ok(ValidForm {
                id: Some(self.id.trim())
                    .filter(|id| !id.is_empty())
                    .map(str::to_string),
                name: name.to_string(),
                price,
                create_at,
                category_id: category_id.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

impl ValidForm {
    pub fn into_params(self, photo: Option<UploadedPhoto>) -> SubmitProductParams {
        SubmitProductParams {
            id: self.id,
            name: self.name,
            price: self.price,
            create_at: self.create_at,
            category_id: self.category_id,
            photo,
        }
    }
}

/// Reads the multipart product form; the `file` part becomes the uploaded photo.
pub async fn read_submission(
    mut multipart: Multipart,
) -> poem::Result<(ProductForm, Option<UploadedPhoto>)> {
    let mut form = ProductForm::default();
    let mut photo = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "file" {
            let filename = field.file_name().unwrap_or_default().to_string();
            let content = field.bytes().await.map_err(BadRequest)?;
            photo = Some(UploadedPhoto { filename, content });
        } else {
            let value = field.text().await.map_err(BadRequest)?;
            form.set(&name, value);
        }
    }

    Ok((form, photo))
}

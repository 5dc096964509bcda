//! Rendering strategies of the product listing.

use std::io;
use std::time::Duration;

use futures_util::stream::{self, Stream, StreamExt};
use poem::Body;
use serde::Deserialize;

use business::domain::category::model::Category;
use business::domain::product::model::Product;

use super::views::{self, RowLayout};

/// Times the result set is repeated by the `full` and `chunked` modes.
pub const REPEAT_COUNT: usize = 2000;
/// Rows flushed together by the `data-driver` mode.
pub const DRIVER_BUFFER: usize = 2;

const TITLE: &str = "product list";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListMode {
    #[default]
    Standard,
    DataDriver,
    Full,
    Chunked,
}

/// Everything a listing page shows besides the rows.
pub struct ListPage {
    pub categories: Vec<Category>,
    pub banner: String,
}

impl ListPage {
    fn head(&self) -> String {
        let mut head = views::page_head(TITLE, &self.categories);
        head.push_str(&self.banner);
        head
    }
}

pub fn render(mode: ListMode, page: ListPage, products: Vec<Product>, delay: Duration) -> Body {
    match mode {
        ListMode::Standard => Body::from_string(whole(&page, &products, RowLayout::Table)),
        ListMode::Full => {
            let repeated: Vec<Product> = repeated(products).collect();
            Body::from_string(whole(&page, &repeated, RowLayout::Table))
        }
        ListMode::DataDriver => {
            let rows = stream::iter(products)
                .then(move |product| async move {
                    tokio::time::sleep(delay).await;
                    product
                })
                .chunks(DRIVER_BUFFER)
                .map(|batch| {
                    batch
                        .iter()
                        .map(|product| views::product_row(product, RowLayout::Table))
                        .collect::<String>()
                });
            streamed(&page, rows, RowLayout::Table)
        }
        ListMode::Chunked => {
            let rows = stream::iter(repeated(products))
                .map(|product| views::product_row(&product, RowLayout::Chunked));
            streamed(&page, rows, RowLayout::Chunked)
        }
    }
}

fn repeated(products: Vec<Product>) -> impl Iterator<Item = Product> + Send + 'static {
    (0..REPEAT_COUNT).flat_map(move |_| products.clone())
}

fn whole(page: &ListPage, products: &[Product], layout: RowLayout) -> String {
    let mut html = page.head();
    html.push_str(views::rows_head(layout));
    for product in products {
        html.push_str(&views::product_row(product, layout));
    }
    html.push_str(views::rows_tail(layout));
    html.push_str(views::page_tail());
    html
}

fn streamed<S>(page: &ListPage, rows: S, layout: RowLayout) -> Body
where
    S: Stream<Item = String> + Send + 'static,
{
    let head = page.head() + views::rows_head(layout);
    let tail = format!("{}{}", views::rows_tail(layout), views::page_tail());

    let body = stream::iter([head])
        .chain(rows)
        .chain(stream::iter([tail]))
        .map(Ok::<_, io::Error>);
    Body::from_bytes_stream(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::Utc;

    fn products(names: &[&str]) -> Vec<Product> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Product::from_repository(
                    format!("p-{i}"),
                    name.to_string(),
                    BigDecimal::from(10),
                    Utc::now(),
                    None,
                    Category::from_repository("c-1".to_string(), "Electronics".to_string()),
                )
            })
            .collect()
    }

    fn page() -> ListPage {
        ListPage {
            categories: Vec::new(),
            banner: String::new(),
        }
    }

    #[tokio::test]
    async fn should_render_every_row_in_standard_mode() {
        let body = render(ListMode::Standard, page(), products(&["A", "B"]), Duration::ZERO)
            .into_string()
            .await
            .unwrap();

        assert!(body.starts_with("<!DOCTYPE html>"));
        assert_eq!(body.matches("<tr><td>").count(), 2);
        assert!(body.ends_with("</html>\n"));
    }

    #[tokio::test]
    async fn should_stream_rows_in_data_driver_mode() {
        let body = render(ListMode::DataDriver, page(), products(&["A", "B", "C"]), Duration::ZERO)
            .into_string()
            .await
            .unwrap();

        assert_eq!(body.matches("<tr><td>").count(), 3);
        assert!(body.ends_with("</html>\n"));
    }

    #[tokio::test]
    async fn should_repeat_rows_in_chunked_mode() {
        let body = render(ListMode::Chunked, page(), products(&["A"]), Duration::ZERO)
            .into_string()
            .await
            .unwrap();

        assert_eq!(body.matches("<div class=\"product\">").count(), REPEAT_COUNT);
    }

    #[test]
    fn should_parse_modes_from_query_values() {
        #[derive(Deserialize)]
        struct Params {
            mode: ListMode,
        }

        let parse = |raw: &str| serde_json::from_str::<Params>(&format!("{{\"mode\":\"{raw}\"}}"));

        assert_eq!(parse("data-driver").unwrap().mode, ListMode::DataDriver);
        assert_eq!(parse("full").unwrap().mode, ListMode::Full);
        assert!(parse("list-full").is_err());
        assert_eq!(ListMode::default(), ListMode::Standard);
    }
}

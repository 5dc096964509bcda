//! Server-side HTML for the catalog pages.
//!
//! Pages are split into head, rows and tail so listings can be streamed.

use std::collections::BTreeMap;
use std::fmt::Write;

use business::domain::category::model::Category;
use business::domain::product::model::Product;

use super::form::ProductForm;

/// Feedback shown above a listing after a redirect.
pub enum Banner<'a> {
    Success(&'a str),
    Error(&'a str),
}

/// Row markup used by a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout {
    Table,
    Chunked,
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn page_head(title: &str, categories: &[Category]) -> String {
    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n<nav><a href=\"/list\">Products</a> | <a href=\"/form\">New product</a>",
        title = escape(title)
    );
    if !categories.is_empty() {
        html.push_str(" | Categories:");
        for category in categories {
            let _ = write!(html, " <span class=\"category\">{}</span>", escape(&category.name));
        }
    }
    let _ = write!(html, "</nav>\n<h1>{}</h1>\n", escape(title));
    html
}

pub fn page_tail() -> &'static str {
    "</body>\n</html>\n"
}

pub fn banner(banner: Option<Banner<'_>>) -> String {
    match banner {
        Some(Banner::Success(msg)) => format!("<div class=\"alert success\">{}</div>\n", escape(msg)),
        Some(Banner::Error(msg)) => format!("<div class=\"alert error\">{}</div>\n", escape(msg)),
        None => String::new(),
    }
}

pub fn rows_head(layout: RowLayout) -> &'static str {
    match layout {
        RowLayout::Table => {
            "<table>\n<thead><tr><th>id</th><th>name</th><th>price</th><th>date</th><th>category</th><th></th></tr></thead>\n<tbody>\n"
        }
        RowLayout::Chunked => "<div class=\"products\">\n",
    }
}

pub fn rows_tail(layout: RowLayout) -> &'static str {
    match layout {
        RowLayout::Table => "</tbody>\n</table>\n",
        RowLayout::Chunked => "</div>\n",
    }
}

pub fn product_row(product: &Product, layout: RowLayout) -> String {
    let id = escape(&product.id);
    let name = escape(&product.name);
    let date = product.create_at.format("%Y-%m-%d");
    let category = escape(&product.category.name);

    match layout {
        RowLayout::Table => format!(
            "<tr><td><a href=\"/view/{id}\">{id}</a></td><td>{name}</td><td>{price}</td><td>{date}</td><td>{category}</td><td><a href=\"/form/{id}\">edit</a> <a href=\"/delete/{id}\">delete</a></td></tr>\n",
            price = product.price
        ),
        RowLayout::Chunked => format!(
            "<div class=\"product\"><a href=\"/view/{id}\">{name}</a> <span>{price}</span> <span>{date}</span> <span>{category}</span></div>\n",
            price = product.price
        ),
    }
}

pub fn product_detail(product: &Product, categories: &[Category]) -> String {
    let mut html = page_head("Product Detail", categories);
    let _ = write!(
        html,
        "<dl>\n<dt>id</dt><dd>{id}</dd>\n<dt>name</dt><dd>{name}</dd>\n<dt>price</dt><dd>{price}</dd>\n<dt>date</dt><dd>{date}</dd>\n<dt>category</dt><dd>{category}</dd>\n</dl>\n",
        id = escape(&product.id),
        name = escape(&product.name),
        price = product.price,
        date = product.create_at.format("%Y-%m-%d"),
        category = escape(&product.category.name),
    );
    if let Some(photo) = &product.photo {
        let photo = escape(photo);
        let _ = write!(
            html,
            "<img src=\"/uploads/img/{photo}\" alt=\"{name}\">\n",
            name = escape(&product.name)
        );
    }
    html.push_str(page_tail());
    html
}

pub fn product_form(
    title: &str,
    button: &str,
    form: &ProductForm,
    errors: &BTreeMap<&'static str, &'static str>,
    categories: &[Category],
) -> String {
    let mut html = page_head(title, categories);
    html.push_str("<form action=\"/form\" method=\"post\" enctype=\"multipart/form-data\">\n");
    let _ = write!(
        html,
        "<input type=\"hidden\" name=\"id\" value=\"{}\">\n",
        escape(&form.id)
    );

    text_input(&mut html, "name", "text", &form.name, errors);
    text_input(&mut html, "price", "text", &form.price, errors);
    text_input(&mut html, "create_at", "date", &form.create_at, errors);

    html.push_str("<label>category <select name=\"category_id\">\n<option value=\"\">--- select ---</option>\n");
    for category in categories {
        let selected = if category.id == form.category_id { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{selected}>{}</option>",
            escape(&category.id),
            escape(&category.name)
        );
    }
    html.push_str("</select></label>\n");
    field_error(&mut html, "category_id", errors);

    html.push_str("<label>photo <input type=\"file\" name=\"file\"></label>\n");
    let _ = write!(html, "<button type=\"submit\">{}</button>\n</form>\n", escape(button));
    html.push_str(page_tail());
    html
}

fn text_input(
    html: &mut String,
    name: &'static str,
    kind: &str,
    value: &str,
    errors: &BTreeMap<&'static str, &'static str>,
) {
    let _ = writeln!(
        html,
        "<label>{name} <input type=\"{kind}\" name=\"{name}\" value=\"{}\"></label>",
        escape(value)
    );
    field_error(html, name, errors);
}

fn field_error(html: &mut String, field: &str, errors: &BTreeMap<&'static str, &'static str>) {
    if let Some(message) = errors.get(field) {
        let _ = writeln!(html, "<small class=\"error\">{}</small>", escape(message));
    }
}

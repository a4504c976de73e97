use business::domain::product::model::Product;
use business::domain::shared::value_objects::format_money;

use crate::api::context::RequestContext;
use crate::api::views::{escape, escape_attr, layout};

fn product_row(product: &Product) -> String {
    let photo = match &product.photo {
        Some(photo) => format!(
            "<img class=\"thumb\" src=\"{}\" alt=\"{}\">",
            escape_attr(photo),
            escape_attr(&product.name)
        ),
        None => String::new(),
    };
    let id = product.id;
    format!(
        "<tr><td>{photo}</td><td>{code}</td><td>{name}</td><td>${price}</td>\
         <td>{stock}</td><td>{description}</td>\
         <td><a href=\"/products/edit/{id}\">Edit</a> \
         <a href=\"/sales/new?product={id}\">Sell</a> \
         <a href=\"/products/delete/{id}\" \
         onclick=\"return confirm('Delete this product?')\">Delete</a></td></tr>",
        code = escape(&product.code),
        name = escape(&product.name),
        price = format_money(&product.price),
        stock = product.stock,
        description = escape(&product.description),
    )
}

pub fn product_list_page(context: &RequestContext, products: &[Product]) -> String {
    let body = if products.is_empty() {
        "<h1>Products</h1><p>No products registered yet.</p>\
         <p><a href=\"/products/add\">Register a product</a></p>"
            .to_string()
    } else {
        let rows: String = products.iter().map(product_row).collect();
        format!(
            "<h1>Products</h1><p><a href=\"/products/add\">Register a product</a> \
             <a href=\"/reports/inventory\">Inventory PDF</a></p>\
             <table><thead><tr><th>Photo</th><th>ID</th><th>Name</th><th>Price</th>\
             <th>Stock</th><th>Description</th><th></th></tr></thead>\
             <tbody>{}</tbody></table>",
            rows
        )
    };
    layout("Products", context, &body)
}

/// Add form when `product` is `None`, edit form pre-filled otherwise.
pub fn product_form_page(context: &RequestContext, product: Option<&Product>) -> String {
    let (title, action, required) = match product {
        Some(product) => (
            "Edit product",
            format!("/products/edit/{}", product.id),
            "",
        ),
        None => ("Register product", "/products/add".to_string(), " required"),
    };
    let value = |field: fn(&Product) -> String| {
        product
            .map(|p| escape_attr(&field(p)).into_owned())
            .unwrap_or_default()
    };
    let current_photo = match product.and_then(|p| p.photo.as_deref()) {
        Some(photo) => format!(
            "<p><img class=\"thumb\" src=\"{}\" alt=\"Current photo\"></p>",
            escape_attr(photo)
        ),
        None => String::new(),
    };
    let description = product
        .map(|p| escape(&p.description).into_owned())
        .unwrap_or_default();

    let body = format!(
        "<h1>{title}</h1>\
         <form method=\"post\" action=\"{action}\" enctype=\"multipart/form-data\">\
         <label>ID <input type=\"text\" name=\"id\" value=\"{code}\"{required}></label>\
         <label>Name <input type=\"text\" name=\"name\" value=\"{name}\"{required}></label>\
         <label>Price <input type=\"number\" name=\"price\" min=\"0\" step=\"0.01\" \
         value=\"{price}\"{required}></label>\
         <label>Stock <input type=\"number\" name=\"stock\" min=\"0\" step=\"1\" \
         value=\"{stock}\"{required}></label>\
         <label>Description <textarea name=\"description\"{required}>{description}</textarea></label>\
         <label>Photo <input type=\"file\" name=\"photo\" \
         accept=\"image/jpeg,image/png,image/gif\"></label>{current_photo}\
         <button type=\"submit\">Save</button> <a href=\"/products\">Cancel</a></form>",
        code = value(|p| p.code.clone()),
        name = value(|p| p.name.clone()),
        price = value(|p| format_money(&p.price)),
        stock = value(|p| p.stock.to_string()),
    );
    layout(title, context, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use std::str::FromStr;
    use uuid::Uuid;

    fn context() -> RequestContext {
        RequestContext {
            user: None,
            flash: Vec::new(),
        }
    }

    fn product() -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            "P\"1".to_string(),
            "<Coffee>".to_string(),
            BigDecimal::from_str("5").unwrap(),
            "Arabica".to_string(),
            10,
            Some("/uploads/1-coffee.png".to_string()),
            1,
            Utc::now(),
            None,
        )
    }

    #[test]
    fn should_list_products_with_escaped_fields() {
        let html = product_list_page(&context(), &[product()]);

        assert!(html.contains("&lt;Coffee&gt;"));
        assert!(html.contains("$5.00"));
        assert!(html.contains("src=\"/uploads/1-coffee.png\""));
    }

    #[test]
    fn should_prefill_edit_form() {
        let product = product();

        let html = product_form_page(&context(), Some(&product));

        assert!(html.contains(&format!("action=\"/products/edit/{}\"", product.id)));
        assert!(html.contains("value=\"P&quot;1\""));
        assert!(html.contains("value=\"5.00\""));
    }

    #[test]
    fn should_require_fields_on_add_form() {
        let html = product_form_page(&context(), None);

        assert!(html.contains("action=\"/products/add\""));
        assert!(html.contains("name=\"name\" value=\"\" required"));
    }
}

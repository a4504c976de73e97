use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::sale::item_input::{
    ITEMS_FIELD, QUANTITY_FIELD_PREFIX, SELECTED_FIELD_PREFIX,
};
use business::domain::shared::value_objects::format_money;

use crate::api::context::RequestContext;
use crate::api::sale::dto::{CUSTOMER_ID_FIELD, CUSTOMER_NAME_FIELD};
use crate::api::views::{escape, layout};

/// Copies the checked rows into the hidden JSON field before submitting.
const ITEMS_SCRIPT: &str = "<script>\
document.getElementById('sale-form').addEventListener('submit',function(){\
var items=[];\
document.querySelectorAll('tr[data-product]').forEach(function(row){\
var id=row.getAttribute('data-product');\
var sel=row.querySelector('input[type=checkbox]');\
var qty=parseInt(row.querySelector('input[type=number]').value,10)||0;\
if(qty>0){items.push({_id:id,quantity:qty});}\
else if(sel.checked){items.push({_id:id,quantity:1});}});\
document.getElementById('sale-items').value=JSON.stringify(items);});\
</script>";

fn product_row(product: &Product, selected: Option<Uuid>) -> String {
    let id = product.id;
    let is_selected = selected == Some(id);
    format!(
        "<tr data-product=\"{id}\">\
         <td><input type=\"checkbox\" name=\"{sel}{id}\"{checked}></td>\
         <td>{code}</td><td>{name}</td><td>${price}</td><td>{stock}</td>\
         <td><input type=\"number\" name=\"{qty}{id}\" min=\"0\" max=\"{stock}\" \
         step=\"1\" value=\"{quantity}\"></td></tr>",
        sel = SELECTED_FIELD_PREFIX,
        qty = QUANTITY_FIELD_PREFIX,
        checked = if is_selected { " checked" } else { "" },
        code = escape(&product.code),
        name = escape(&product.name),
        price = format_money(&product.price),
        stock = product.stock,
        quantity = if is_selected { 1 } else { 0 },
    )
}

/// `selected` comes from the "Sell" link of the product list.
pub fn new_sale_page(
    context: &RequestContext,
    products: &[Product],
    selected: Option<Uuid>,
) -> String {
    if products.is_empty() {
        return layout(
            "New sale",
            context,
            "<h1>New sale</h1><p>There are no products to sell yet.</p>\
             <p><a href=\"/products/add\">Register a product</a></p>",
        );
    }

    let rows: String = products
        .iter()
        .map(|product| product_row(product, selected))
        .collect();
    let body = format!(
        "<h1>New sale</h1>\
         <form id=\"sale-form\" method=\"post\" action=\"/sales\">\
         <label>Customer name <input type=\"text\" name=\"{CUSTOMER_NAME_FIELD}\"></label>\
         <label>Customer ID <input type=\"text\" name=\"{CUSTOMER_ID_FIELD}\"></label>\
         <input type=\"hidden\" id=\"sale-items\" name=\"{ITEMS_FIELD}\" value=\"\">\
         <table><thead><tr><th></th><th>ID</th><th>Name</th><th>Price</th>\
         <th>Stock</th><th>Quantity</th></tr></thead><tbody>{rows}</tbody></table>\
         <button type=\"submit\">Record sale and download receipt</button></form>{ITEMS_SCRIPT}"
    );
    layout("New sale", context, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::Utc;

    fn product(stock: u32) -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            "P1".to_string(),
            "Coffee".to_string(),
            BigDecimal::from(5),
            "Arabica".to_string(),
            stock,
            None,
            1,
            Utc::now(),
            None,
        )
    }

    fn context() -> RequestContext {
        RequestContext {
            user: None,
            flash: Vec::new(),
        }
    }

    #[test]
    fn should_name_inputs_after_product_ids() {
        let product = product(10);

        let html = new_sale_page(&context(), &[product.clone()], None);

        assert!(html.contains(&format!("name=\"qty-{}\"", product.id)));
        assert!(html.contains(&format!("name=\"sel-{}\"", product.id)));
        assert!(html.contains("name=\"items\""));
    }

    #[test]
    fn should_preselect_product_from_link() {
        let product = product(10);

        let html = new_sale_page(&context(), &[product.clone()], Some(product.id));

        assert!(html.contains(&format!("name=\"sel-{}\" checked", product.id)));
    }

    #[test]
    fn should_point_to_product_registration_when_catalog_is_empty() {
        let html = new_sale_page(&context(), &[], None);

        assert!(html.contains("/products/add"));
        assert!(!html.contains("sale-form"));
    }
}

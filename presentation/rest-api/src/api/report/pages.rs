use crate::api::context::RequestContext;
use crate::api::views::layout;

pub fn reports_page(context: &RequestContext) -> String {
    layout(
        "Reports",
        context,
        "<h1>Reports</h1><ul>\
         <li><a href=\"/reports/inventory\">Inventory (PDF)</a></li>\
         <li><a href=\"/reports/sales-total.xlsx\">Sales total (Excel)</a></li>\
         <li><a href=\"/reports/stock-total.xlsx\">Stock total (Excel)</a></li>\
         <li><a href=\"/reports/customer-total.xlsx\">Totals per customer (Excel)</a></li>\
         </ul>\
         <form method=\"get\" action=\"/reports/customer-total.xlsx\">\
         <label>Customer ID or name <input type=\"text\" name=\"query\"></label>\
         <button type=\"submit\">Download customer total</button></form>",
    )
}

use super::*;
use serde_json::json;

fn shirt_listing() -> Value {
    json!({
        "data": {
            "products": {
                "edges": [{
                    "node": {
                        "title": "Shirt",
                        "status": "ACTIVE",
                        "vendor": "Acme",
                        "productType": "Apparel",
                        "variants": {"edges": [{"node": {"price": "19.99"}}]}
                    }
                }]
            }
        }
    })
}

// =============================================================
// Pass-through
// =============================================================

#[test]
fn plain_text_passes_through() {
    assert_eq!(format("Hello there"), "Hello there");
}

#[test]
fn plain_text_is_escaped() {
    assert_eq!(format("<b>hi</b> & bye"), "&lt;b&gt;hi&lt;/b&gt; &amp; bye");
}

#[test]
fn non_object_json_is_treated_as_text() {
    for raw in ["[1, 2, 3]", "\"quoted\"", "42", "true", "null"] {
        assert_eq!(classify(raw), Reply::Text(raw.to_owned()));
        assert_eq!(format(raw), escape_html(raw));
    }
}

#[test]
fn invalid_json_is_treated_as_text() {
    assert_eq!(classify("{\"data\": "), Reply::Text("{\"data\": ".to_owned()));
}

// =============================================================
// Fallback
// =============================================================

#[test]
fn unrecognized_object_is_pretty_printed_in_input_order() {
    let raw = r#"{"zeta": 1, "alpha": {"nested": true}}"#;
    let expected = "{\n  \"zeta\": 1,\n  \"alpha\": {\n    \"nested\": true\n  }\n}";
    assert_eq!(format(raw), format!("<pre>{}</pre>", escape_html(expected)));
}

#[test]
fn object_with_falsy_data_is_unrecognized() {
    let reply = classify(r#"{"data": null, "error": "boom"}"#);
    assert!(matches!(reply, Reply::Unrecognized(_)));
}

#[test]
fn malformed_listing_entry_falls_back_to_pretty_json() {
    let raw = r#"{"data": {"products": {"edges": [{"node": {"status": "ACTIVE"}}]}}}"#;
    let reply = classify(raw);
    assert!(matches!(reply, Reply::Unrecognized(_)));
    assert!(reply.to_html().starts_with("<pre>"));
}

// =============================================================
// Precedence
// =============================================================

#[test]
fn products_take_precedence_over_orders() {
    let raw = r#"{"data": {"orders": {"edges": []}, "products": {"edges": []}}}"#;
    assert_eq!(classify(raw), Reply::Products(Vec::new()));
}

#[test]
fn null_products_fall_through_to_orders() {
    let raw = r#"{"data": {"products": null, "orders": {"edges": []}}}"#;
    assert_eq!(classify(raw), Reply::Orders(Vec::new()));
}

#[test]
fn shop_is_checked_last() {
    let raw = r#"{"data": {"shop": {"name": "Acme"}, "customers": {"edges": []}}}"#;
    assert_eq!(classify(raw), Reply::Customers(Vec::new()));
}

// =============================================================
// Empty listings
// =============================================================

#[test]
fn empty_listings_render_not_found_messages() {
    assert_eq!(format(r#"{"data":{"products":{"edges":[]}}}"#), "No products found.");
    assert_eq!(format(r#"{"data":{"orders":{"edges":[]}}}"#), "No orders found.");
    assert_eq!(format(r#"{"data":{"customers":{"edges":[]}}}"#), "No customers found.");
}

#[test]
fn listing_without_edges_renders_not_found() {
    assert_eq!(format(r#"{"data":{"orders":{}}}"#), "No orders found.");
    assert_eq!(format(r#"{"data":{"customers":{"edges":null}}}"#), "No customers found.");
}

// =============================================================
// Products
// =============================================================

#[test]
fn product_block_renders_all_fields() {
    let html = format(&shirt_listing().to_string());
    assert_eq!(
        html,
        concat!(
            r#"<div class="response-list"><div class="response-item"><h4>Shirt</h4>"#,
            "<p><strong>Status:</strong> ACTIVE</p>",
            "<p><strong>Vendor:</strong> Acme</p>",
            "<p><strong>Type:</strong> Apparel</p>",
            "<p><strong>Price:</strong> $19.99</p>",
            "</div></div>"
        )
    );
}

#[test]
fn product_missing_vendor_defaults_independently() {
    let raw = r#"{"data":{"products":{"edges":[{"node":{"title":"Mug","status":"DRAFT","productType":"Kitchen","variants":{"edges":[]}}}]}}}"#;
    let blocks = classify(raw).blocks().unwrap();
    assert_eq!(blocks[0].value("Vendor"), Some("N/A"));
    assert_eq!(blocks[0].value("Type"), Some("Kitchen"));
}

#[test]
fn product_empty_type_defaults_to_not_available() {
    let raw = r#"{"data":{"products":{"edges":[{"node":{"title":"Mug","vendor":"Acme","productType":""}}]}}}"#;
    let blocks = classify(raw).blocks().unwrap();
    assert_eq!(blocks[0].value("Vendor"), Some("Acme"));
    assert_eq!(blocks[0].value("Type"), Some("N/A"));
}

#[test]
fn product_without_variants_has_no_price() {
    let raw = r#"{"data":{"products":{"edges":[{"node":{"title":"Mug","variants":{"edges":[]}}}]}}}"#;
    let blocks = classify(raw).blocks().unwrap();
    assert_eq!(blocks[0].value("Price"), None);
}

#[test]
fn product_variants_without_edges_has_no_price() {
    let raw = r#"{"data":{"products":{"edges":[{"node":{"title":"Mug","variants":{}}}]}}}"#;
    let blocks = classify(raw).blocks().unwrap();
    assert_eq!(blocks[0].heading, "Mug");
    assert_eq!(blocks[0].value("Price"), None);
}

#[test]
fn product_price_uses_first_variant_and_accepts_numbers() {
    let raw = r#"{"data":{"products":{"edges":[{"node":{"title":"Mug","variants":{"edges":[{"node":{"price":12.5}},{"node":{"price":"99.00"}}]}}}]}}}"#;
    let blocks = classify(raw).blocks().unwrap();
    assert_eq!(blocks[0].value("Price"), Some("$12.5"));
}

#[test]
fn product_values_are_escaped() {
    let raw = r#"{"data":{"products":{"edges":[{"node":{"title":"<script>alert(1)</script>"}}]}}}"#;
    let html = format(raw);
    assert!(html.contains("<h4>&lt;script&gt;alert(1)&lt;/script&gt;</h4>"));
    assert!(!html.contains("<script>"));
}

// =============================================================
// Orders
// =============================================================

#[test]
fn order_block_renders_total_customer_and_date() {
    let raw = json!({"data": {"orders": {"edges": [{"node": {
        "name": "#1001",
        "totalPrice": "54.00",
        "currencyCode": "USD",
        "financialStatus": "PAID",
        "customer": {"firstName": "Ada", "lastName": "Lovelace"},
        "createdAt": "2024-03-05T12:00:00Z"
    }}]}}});
    let blocks = classify(&raw.to_string()).blocks().unwrap();
    let order = &blocks[0];
    assert_eq!(order.heading, "Order #1001");
    assert_eq!(order.value("Total"), Some("$54.00 USD"));
    assert_eq!(order.value("Status"), Some("PAID"));
    assert_eq!(order.value("Customer"), Some("Ada Lovelace"));
    assert_eq!(order.value("Date"), Some("3/5/2024"));
}

#[test]
fn order_without_customer_shows_not_available() {
    let raw = r##"{"data":{"orders":{"edges":[{"node":{"name":"#1002","customer":null}}]}}}"##;
    let blocks = classify(raw).blocks().unwrap();
    assert_eq!(blocks[0].value("Customer"), Some("N/A"));
}

// =============================================================
// Customers
// =============================================================

#[test]
fn customer_block_renders_name_and_spend() {
    let raw = json!({"data": {"customers": {"edges": [{"node": {
        "firstName": "Grace",
        "lastName": "Hopper",
        "email": "grace@example.com",
        "ordersCount": "3",
        "totalSpent": "120.50",
        "createdAt": "2021-11-20T08:00:00Z"
    }}]}}});
    let blocks = classify(&raw.to_string()).blocks().unwrap();
    let customer = &blocks[0];
    assert_eq!(customer.heading, "Grace Hopper");
    assert_eq!(customer.value("Email"), Some("grace@example.com"));
    assert_eq!(customer.value("Orders"), Some("3"));
    assert_eq!(customer.value("Total Spent"), Some("$120.50"));
    assert_eq!(customer.value("Joined"), Some("11/20/2021"));
}

#[test]
fn listing_renders_one_block_per_entry() {
    let raw = r#"{"data":{"customers":{"edges":[{"node":{"firstName":"A"}},{"node":{"firstName":"B"}}]}}}"#;
    let html = format(raw);
    assert_eq!(html.matches(r#"<div class="response-item">"#).count(), 2);
}

// =============================================================
// Shop
// =============================================================

#[test]
fn shop_renders_store_info_block() {
    let raw = json!({"data": {"shop": {
        "name": "Acme Outfitters",
        "domain": "acme.example",
        "email": "owner@acme.example",
        "currencyCode": "USD",
        "timezone": "(GMT-05:00) Eastern Time",
        "plan": {"displayName": "Basic"}
    }}});
    let html = format(&raw.to_string());
    assert!(html.starts_with(r#"<div class="store-info"><h4>Acme Outfitters</h4>"#));
    assert!(html.contains("<p><strong>Domain:</strong> acme.example</p>"));
    assert!(html.contains("<p><strong>Plan:</strong> Basic</p>"));
}

#[test]
fn shop_without_plan_shows_not_available() {
    let blocks = classify(r#"{"data":{"shop":{"name":"Acme"}}}"#).blocks().unwrap();
    assert_eq!(blocks[0].value("Plan"), Some("N/A"));
}

// =============================================================
// Text rendering
// =============================================================

#[test]
fn text_rendering_lists_fields_under_heading() {
    let text = classify(&shirt_listing().to_string()).to_text();
    assert_eq!(
        text,
        "- Shirt\n  Status: ACTIVE\n  Vendor: Acme\n  Type: Apparel\n  Price: $19.99"
    );
}

#[test]
fn text_rendering_of_empty_listing_is_not_found_message() {
    assert_eq!(classify(r#"{"data":{"orders":{"edges":[]}}}"#).to_text(), "No orders found.");
}

#[test]
fn text_separates_blocks_with_blank_line() {
    let raw = r#"{"data":{"customers":{"edges":[{"node":{"firstName":"Ada","email":"ada@example.test"}},{"node":{"firstName":"Bo"}}]}}}"#;
    let text = classify(raw).to_text();
    assert!(text.starts_with("- Ada\n  Email: ada@example.test\n"));
    assert!(text.contains("\n\n- Bo\n  Email: \n"));
}

#[test]
fn html_lists_fields_in_display_order() {
    let raw = r#"{"data":{"customers":{"edges":[{"node":{"firstName":"Ada","lastName":"L","ordersCount":3}}]}}}"#;
    let html = format(raw);
    let email = html.find("<strong>Email:</strong>").unwrap();
    let orders = html.find("<strong>Orders:</strong> 3</p>").unwrap();
    assert!(email < orders);
    assert!(html.starts_with(r#"<div class="response-list"><div class="response-item"><h4>Ada L</h4>"#));
}

#[test]
fn text_rendering_keeps_plain_text_unescaped() {
    assert_eq!(classify("a < b").to_text(), "a < b");
}

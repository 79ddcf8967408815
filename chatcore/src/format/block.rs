//! Display field sets for each recognized entry kind.
//!
//! A [`Block`] is the renderer-neutral result: a heading plus labelled
//! values, unescaped. The HTML and text renderers only decide layout.

use super::date::calendar_date;
use super::model::{Customer, Order, Product, Scalar, Shop};

const NOT_AVAILABLE: &str = "N/A";

/// One labelled line inside a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

/// One rendered entry: a heading and its fields in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub heading: String,
    pub fields: Vec<Field>,
}

impl Block {
    fn new(heading: String) -> Self {
        Self { heading, fields: Vec::new() }
    }

    fn field(mut self, label: &'static str, value: String) -> Self {
        self.fields.push(Field { label, value });
        self
    }

    /// Value of the first field with `label`, if any.
    #[must_use]
    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

impl From<&Product> for Block {
    fn from(product: &Product) -> Self {
        let block = Self::new(product.title.to_string())
            .field("Status", text(product.status.as_ref()))
            .field("Vendor", or_not_available(product.vendor.as_ref()))
            .field("Type", or_not_available(product.product_type.as_ref()));

        // Price only appears when the product has at least one variant.
        match product.variants.as_ref().and_then(|variants| variants.first()) {
            Some(variant) => block.field("Price", money(variant.price.as_ref())),
            None => block,
        }
    }
}

impl From<&Order> for Block {
    fn from(order: &Order) -> Self {
        let total = format!("{} {}", money(order.total_price.as_ref()), text(order.currency_code.as_ref()));
        let customer = order
            .customer
            .as_ref()
            .map_or_else(|| NOT_AVAILABLE.to_owned(), |person| person.full_name());

        Self::new(format!("Order {}", order.name))
            .field("Total", total.trim().to_owned())
            .field("Status", text(order.financial_status.as_ref()))
            .field("Customer", customer)
            .field("Date", date(order.created_at.as_ref()))
    }
}

impl From<&Customer> for Block {
    fn from(customer: &Customer) -> Self {
        Self::new(customer.full_name())
            .field("Email", text(customer.email.as_ref()))
            .field("Orders", text(customer.orders_count.as_ref()))
            .field("Total Spent", money(customer.total_spent.as_ref()))
            .field("Joined", date(customer.created_at.as_ref()))
    }
}

impl From<&Shop> for Block {
    fn from(shop: &Shop) -> Self {
        let plan = shop
            .plan
            .as_ref()
            .and_then(|plan| plan.display_name.as_ref());

        Self::new(shop.name.to_string())
            .field("Domain", text(shop.domain.as_ref()))
            .field("Email", text(shop.email.as_ref()))
            .field("Currency", text(shop.currency_code.as_ref()))
            .field("Timezone", text(shop.timezone.as_ref()))
            .field("Plan", or_not_available(plan))
    }
}

fn text(value: Option<&Scalar>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

fn or_not_available(value: Option<&Scalar>) -> String {
    match value {
        Some(scalar) if !scalar.is_blank() => scalar.to_string(),
        _ => NOT_AVAILABLE.to_owned(),
    }
}

fn money(value: Option<&Scalar>) -> String {
    match value {
        Some(amount) if !amount.is_blank() => format!("${amount}"),
        _ => String::new(),
    }
}

fn date(value: Option<&Scalar>) -> String {
    value.map(|raw| calendar_date(&raw.to_string())).unwrap_or_default()
}

//! Reply formatter: turns assistant reply text into displayable output.
//!
//! DESIGN
//! ======
//! Formatting is two steps. [`classify`] decides what a payload is and
//! produces a [`Reply`]; `to_html` / `to_text` render it. Classification
//! checks `data.products`, `data.orders`, `data.customers`, then
//! `data.shop`, and the first present (JSON-truthy) key wins. Every input
//! lands in some variant: non-JSON and non-object input is [`Reply::Text`],
//! unknown or malformed objects are [`Reply::Unrecognized`]. Nothing in
//! this module can fail.

pub mod block;
pub mod date;
pub mod html;
pub mod model;
mod text;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::ListingKind;
use block::Block;
pub use html::escape_html;
use model::{Customer, Edge, Order, Product, Shop};

/// A classified assistant reply.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    /// Not a JSON object; shown as (escaped) text.
    Text(String),
    Products(Vec<Product>),
    Orders(Vec<Order>),
    Customers(Vec<Customer>),
    Shop(Shop),
    /// A JSON object with no recognized payload, shown pretty-printed.
    Unrecognized(Value),
}

/// Classify and render `raw` as an HTML fragment.
#[must_use]
pub fn format(raw: &str) -> String {
    classify(raw).to_html()
}

/// Decide which [`Reply`] variant `raw` is.
#[must_use]
pub fn classify(raw: &str) -> Reply {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) if value.is_object() => classify_object(value),
        _ => Reply::Text(raw.to_owned()),
    }
}

/// Classify an already-parsed JSON object.
#[must_use]
pub fn classify_object(value: Value) -> Reply {
    let data = value.get("data").filter(|data| is_truthy(data));
    let payload = |key: &str| data.and_then(|data| data.get(key)).filter(|v| is_truthy(v));

    let classified = if let Some(listing) = payload(ListingKind::Products.key()) {
        entries(listing).map(Reply::Products)
    } else if let Some(listing) = payload(ListingKind::Orders.key()) {
        entries(listing).map(Reply::Orders)
    } else if let Some(listing) = payload(ListingKind::Customers.key()) {
        entries(listing).map(Reply::Customers)
    } else if let Some(shop) = payload("shop") {
        serde_json::from_value::<Shop>(shop.clone()).ok().map(Reply::Shop)
    } else {
        None
    };

    classified.unwrap_or(Reply::Unrecognized(value))
}

/// JavaScript-style truthiness: null, false, 0, and "" are falsy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Nodes of a `{edges: [{node}]}` listing. Missing or null edges are an
/// empty listing; edges that do not decode are `None`.
fn entries<T: DeserializeOwned>(listing: &Value) -> Option<Vec<T>> {
    match listing.get("edges") {
        None | Some(Value::Null) => Some(Vec::new()),
        Some(edges) => serde_json::from_value::<Vec<Edge<T>>>(edges.clone())
            .ok()
            .map(|edges| edges.into_iter().map(|edge| edge.node).collect()),
    }
}

impl Reply {
    /// Listing kind for the three listing variants.
    #[must_use]
    pub fn listing_kind(&self) -> Option<ListingKind> {
        match self {
            Self::Products(_) => Some(ListingKind::Products),
            Self::Orders(_) => Some(ListingKind::Orders),
            Self::Customers(_) => Some(ListingKind::Customers),
            Self::Text(_) | Self::Shop(_) | Self::Unrecognized(_) => None,
        }
    }

    /// Display blocks for listing and shop variants.
    #[must_use]
    pub fn blocks(&self) -> Option<Vec<Block>> {
        match self {
            Self::Products(items) => Some(items.iter().map(Block::from).collect()),
            Self::Orders(items) => Some(items.iter().map(Block::from).collect()),
            Self::Customers(items) => Some(items.iter().map(Block::from).collect()),
            Self::Shop(shop) => Some(vec![Block::from(shop)]),
            Self::Text(_) | Self::Unrecognized(_) => None,
        }
    }

    /// HTML fragment for the chat transcript or the store-info modal.
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Text(raw) => escape_html(raw),
            Self::Unrecognized(value) => html::pretty_json(value),
            Self::Shop(shop) => html::store_info(&Block::from(shop)),
            _ => self.render_listing(html::listing),
        }
    }

    /// Plain-text rendering for terminals.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(raw) => raw.clone(),
            Self::Unrecognized(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::Shop(shop) => text::blocks(&[Block::from(shop)]),
            _ => self.render_listing(text::blocks),
        }
    }

    fn render_listing(&self, render: fn(&[Block]) -> String) -> String {
        let blocks = self.blocks().unwrap_or_default();
        match self.listing_kind() {
            Some(kind) if blocks.is_empty() => kind.empty_message().to_owned(),
            _ => render(&blocks),
        }
    }
}

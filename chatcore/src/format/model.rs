//! Typed views of the store payloads the formatter recognizes.
//!
//! Every listing uses edge/node wrapping: `{edges: [{node: {...}}]}`.
//! Only the fields the widget displays are modeled; anything else in the
//! payload is ignored. A node missing a required field fails to decode and
//! the caller falls back to the raw JSON rendering.

use std::fmt;

use serde::Deserialize;

/// A leaf value that may arrive as a JSON string, number, or boolean.
///
/// Money amounts and counters come back as strings from some API versions
/// and as numbers from others; both display the same way.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl Scalar {
    /// `true` for an empty or whitespace-only string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

/// `{edges: [...]}` connection wrapper.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Connection<T> {
    pub edges: Option<Vec<Edge<T>>>,
}

impl<T> Connection<T> {
    /// First node, if the connection has any entries.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.edges.as_deref().and_then(<[Edge<T>]>::first).map(|edge| &edge.node)
    }
}

/// `{node: {...}}` entry wrapper.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub title: Scalar,
    #[serde(default)]
    pub status: Option<Scalar>,
    #[serde(default)]
    pub vendor: Option<Scalar>,
    #[serde(default)]
    pub product_type: Option<Scalar>,
    #[serde(default)]
    pub variants: Option<Connection<Variant>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub price: Option<Scalar>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub name: Scalar,
    #[serde(default)]
    pub total_price: Option<Scalar>,
    #[serde(default)]
    pub currency_code: Option<Scalar>,
    #[serde(default)]
    pub financial_status: Option<Scalar>,
    /// Linked customer; `None` for guest checkouts.
    #[serde(default)]
    pub customer: Option<PersonName>,
    #[serde(default)]
    pub created_at: Option<Scalar>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub first_name: Option<Scalar>,
    #[serde(default)]
    pub last_name: Option<Scalar>,
    #[serde(default)]
    pub email: Option<Scalar>,
    #[serde(default)]
    pub orders_count: Option<Scalar>,
    #[serde(default)]
    pub total_spent: Option<Scalar>,
    #[serde(default)]
    pub created_at: Option<Scalar>,
}

impl Customer {
    #[must_use]
    pub fn full_name(&self) -> String {
        join_name(self.first_name.as_ref(), self.last_name.as_ref())
    }
}

/// Name fields of a customer linked from an order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    #[serde(default)]
    pub first_name: Option<Scalar>,
    #[serde(default)]
    pub last_name: Option<Scalar>,
}

impl PersonName {
    #[must_use]
    pub fn full_name(&self) -> String {
        join_name(self.first_name.as_ref(), self.last_name.as_ref())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub name: Scalar,
    #[serde(default)]
    pub domain: Option<Scalar>,
    #[serde(default)]
    pub email: Option<Scalar>,
    #[serde(default)]
    pub currency_code: Option<Scalar>,
    #[serde(default)]
    pub timezone: Option<Scalar>,
    #[serde(default)]
    pub plan: Option<Plan>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(default)]
    pub display_name: Option<Scalar>,
}

fn join_name(first: Option<&Scalar>, last: Option<&Scalar>) -> String {
    [first, last]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_blank())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

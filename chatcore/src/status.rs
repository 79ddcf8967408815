//! Store status panel: presence probes, health check, store-info fetch.
//!
//! SYSTEM CONTEXT
//! ==============
//! These run independently of the conversation. The three presence probes
//! and the health check may resolve in any order; a failing probe only
//! leaves its own counter unset. Store info is fetched each time the modal
//! opens.
//!
//! ERROR HANDLING
//! ==============
//! Probe and health failures are logged and folded into the returned value.
//! Store info is the one place an unexpected body shape is an error
//! ([`StoreInfoError::InvalidFormat`]) rather than a formatter fallback.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use serde_json::Value;

use crate::api::{ApiError, ListingKind, PROBE_LIMIT, StoreApi};
use crate::format::html::{error_panel, store_info};
use crate::format::block::Block;
use crate::format::is_truthy;
use crate::format::model::Shop;

/// Fixed text shown when the store-info modal cannot load.
pub const STORE_INFO_ERROR_MESSAGE: &str = "Failed to load store information. Please try again.";

// =============================================================================
// COUNTS
// =============================================================================

/// Coarse presence indicator derived from a `limit=1` probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Empty,
    Some,
}

impl Presence {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Empty => "0",
            Self::Some => "1+",
        }
    }
}

/// Per-listing presence; `None` until a probe succeeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub products: Option<Presence>,
    pub orders: Option<Presence>,
    pub customers: Option<Presence>,
}

impl StoreCounts {
    #[must_use]
    pub fn get(&self, kind: ListingKind) -> Option<Presence> {
        match kind {
            ListingKind::Products => self.products,
            ListingKind::Orders => self.orders,
            ListingKind::Customers => self.customers,
        }
    }

    pub fn set(&mut self, kind: ListingKind, presence: Option<Presence>) {
        let slot = match kind {
            ListingKind::Products => &mut self.products,
            ListingKind::Orders => &mut self.orders,
            ListingKind::Customers => &mut self.customers,
        };
        *slot = presence;
    }

    /// Counter text: `0`, `1+`, or `-` when unknown.
    #[must_use]
    pub fn label(&self, kind: ListingKind) -> &'static str {
        self.get(kind).map_or("-", Presence::label)
    }
}

/// Presence from a listing body, or `None` when `data.<kind>` is missing or
/// `edges` is not a list. Missing or null edges count as empty.
#[must_use]
pub fn presence_from_listing(kind: ListingKind, body: &Value) -> Option<Presence> {
    let listing = body
        .get("data")
        .and_then(|data| data.get(kind.key()))
        .filter(|listing| is_truthy(listing))?;

    match listing.get("edges") {
        None | Some(Value::Null) => Some(Presence::Empty),
        Some(Value::Array(edges)) if edges.is_empty() => Some(Presence::Empty),
        Some(Value::Array(_)) => Some(Presence::Some),
        Some(_) => None,
    }
}

/// Probe one listing with `limit=1`.
pub async fn probe_presence<A>(api: &A, kind: ListingKind) -> Option<Presence>
where
    A: StoreApi + ?Sized,
{
    match api.listing(kind, PROBE_LIMIT).await {
        Ok(body) => {
            let presence = presence_from_listing(kind, &body);
            if presence.is_none() {
                tracing::warn!(kind = kind.key(), "store probe returned an unexpected shape");
            }
            presence
        }
        Err(error) => {
            tracing::warn!(kind = kind.key(), %error, "error loading store stats");
            None
        }
    }
}

/// Run all three probes concurrently.
pub async fn load_store_stats<A>(api: &A) -> StoreCounts
where
    A: StoreApi + ?Sized,
{
    let (products, orders, customers) = futures::join!(
        probe_presence(api, ListingKind::Products),
        probe_presence(api, ListingKind::Orders),
        probe_presence(api, ListingKind::Customers),
    );
    StoreCounts { products, orders, customers }
}

// =============================================================================
// CONNECTIVITY
// =============================================================================

/// Assistant connectivity, checked once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Checking...",
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }

    /// BEM modifier for the status indicator.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
        }
    }
}

/// 2xx from the health endpoint is connected; anything else is not.
pub async fn check_connection<A>(api: &A) -> ConnectionStatus
where
    A: StoreApi + ?Sized,
{
    match api.health().await {
        Ok(()) => ConnectionStatus::Connected,
        Err(error) => {
            tracing::warn!(%error, "health check failed");
            ConnectionStatus::Disconnected
        }
    }
}

// =============================================================================
// STORE INFO
// =============================================================================

/// Why the store-info modal could not show the shop.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreInfoError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Invalid response format")]
    InvalidFormat,
}

/// Extract `data.shop` from a store-info body.
///
/// # Errors
///
/// [`StoreInfoError::InvalidFormat`] when `data.shop` is missing, falsy, or
/// lacks required fields.
pub fn shop_from_body(body: &Value) -> Result<Shop, StoreInfoError> {
    let shop = body
        .get("data")
        .and_then(|data| data.get("shop"))
        .filter(|shop| is_truthy(shop))
        .ok_or(StoreInfoError::InvalidFormat)?;
    serde_json::from_value(shop.clone()).map_err(|_| StoreInfoError::InvalidFormat)
}

/// Fetch and decode the shop record.
///
/// # Errors
///
/// [`StoreInfoError::Api`] for transport or status failures and
/// [`StoreInfoError::InvalidFormat`] for an unexpected body.
pub async fn fetch_store_info<A>(api: &A) -> Result<Shop, StoreInfoError>
where
    A: StoreApi + ?Sized,
{
    let body = api.store_info().await?;
    shop_from_body(&body)
}

/// Contents of the store-info modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StoreInfoView {
    #[default]
    Hidden,
    Loading,
    /// Rendered shop HTML.
    Loaded(String),
    /// Rendered error panel HTML.
    Failed(String),
}

impl StoreInfoView {
    /// View for a finished fetch; failures are logged here.
    #[must_use]
    pub fn from_result(result: Result<Shop, StoreInfoError>) -> Self {
        match result {
            Ok(shop) => Self::Loaded(store_info(&Block::from(&shop))),
            Err(error) => {
                tracing::error!(%error, "error loading store info");
                Self::Failed(error_panel(STORE_INFO_ERROR_MESSAGE, &error.to_string()))
            }
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

//! Backend endpoints, wire types, and the `StoreApi` transport seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget talks to two backend families: the assistant (`/api/ai/*`)
//! and the store listings (`/api/shopify/*`). Every surface implements
//! [`StoreApi`] with its own HTTP stack (`gloo-net` in the browser,
//! `reqwest` in the terminal); the session and status logic only ever see
//! this trait.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx status is a failure regardless of body content. Callers get
//! an [`ApiError`] and decide how to surface it; nothing here retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Assistant chat endpoint.
pub const CHAT_PATH: &str = "/api/ai/chat";

/// Assistant health endpoint; only the status code is consumed.
pub const HEALTH_PATH: &str = "/api/ai/health";

/// Single shop record endpoint.
pub const STORE_INFO_PATH: &str = "/api/shopify/store-info";

/// Page size used by presence probes.
pub const PROBE_LIMIT: u32 = 1;

// =============================================================================
// ERRORS
// =============================================================================

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The response body was not the JSON shape the caller expected.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No transport exists in this build (server-side rendering).
    #[error("not available on server")]
    Unavailable,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Body of `POST /api/ai/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Prior exchange exactly as the backend last returned it.
    pub history: Vec<Value>,
}

/// Response of `POST /api/ai/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Assistant reply text; may itself be a JSON document.
    pub response: String,
    /// Replacement history; absent or null means empty.
    #[serde(default)]
    pub conversation_history: Option<Vec<Value>>,
}

/// The three store listings the widget knows how to probe and render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Products,
    Orders,
    Customers,
}

impl ListingKind {
    pub const ALL: [Self; 3] = [Self::Products, Self::Orders, Self::Customers];

    /// Key under `data` in a listing response, and the path segment.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Customers => "customers",
        }
    }

    /// Literal shown when a listing has no entries.
    #[must_use]
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Products => "No products found.",
            Self::Orders => "No orders found.",
            Self::Customers => "No customers found.",
        }
    }
}

/// Path of a size-limited listing request, e.g. `/api/shopify/orders?limit=1`.
#[must_use]
pub fn listing_path(kind: ListingKind, limit: u32) -> String {
    format!("/api/shopify/{}?limit={limit}", kind.key())
}

/// Join a base URL and an absolute API path without doubling slashes.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// HTTP transport to the assistant and store backends.
///
/// `?Send` so browser futures, which are not `Send`, can implement it.
#[async_trait::async_trait(?Send)]
pub trait StoreApi {
    /// `POST /api/ai/chat`.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError>;

    /// `GET /api/ai/health`; `Ok` only for a 2xx status.
    async fn health(&self) -> Result<(), ApiError>;

    /// `GET` an API path and parse the 2xx body as JSON.
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// `GET /api/shopify/<kind>?limit=<limit>`.
    async fn listing(&self, kind: ListingKind, limit: u32) -> Result<Value, ApiError> {
        self.get_json(&listing_path(kind, limit)).await
    }

    /// `GET /api/shopify/store-info`.
    async fn store_info(&self) -> Result<Value, ApiError> {
        self.get_json(STORE_INFO_PATH).await
    }
}

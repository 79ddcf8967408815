//! Browser transport for the assistant and store endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, relative to the
//! page origin so the widget host can forward them.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status` before the body is read, so
//! an error page is never mistaken for data.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use chatcore::api::{ApiError, ChatReply, ChatRequest, StoreApi};
#[cfg(feature = "hydrate")]
use chatcore::api::{CHAT_PATH, HEALTH_PATH};
use serde_json::Value;

/// `StoreApi` over the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserApi;

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Decode(err.to_string())
}

#[async_trait::async_trait(?Send)]
impl StoreApi for BrowserApi {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(CHAT_PATH)
                .json(request)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<ChatReply>().await.map_err(decode_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn health(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(HEALTH_PATH)
                .send()
                .await
                .map_err(transport_error)?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(path)
                .send()
                .await
                .map_err(transport_error)?;
            if !resp.ok() {
                log::debug!("GET {path} returned {}", resp.status());
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<Value>().await.map_err(decode_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }
}

//! `StoreApi` over `reqwest`, rooted at the widget host or the backend.

use async_trait::async_trait;
use chatcore::api::{ApiError, CHAT_PATH, ChatReply, ChatRequest, HEALTH_PATH, StoreApi, join_url};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() { Ok(response) } else { Err(ApiError::Status(status.as_u16())) }
}

#[async_trait(?Send)]
impl StoreApi for HttpApi {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        let response = self
            .http
            .post(self.url(CHAT_PATH))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        let body = check_status(response)?.text().await.map_err(transport_error)?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn health(&self) -> Result<(), ApiError> {
        let response = self
            .http
            .get(self.url(HEALTH_PATH))
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).map(|_| ())
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(transport_error)?;
        let body = check_status(response)?.text().await.map_err(transport_error)?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

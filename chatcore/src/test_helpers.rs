//! In-memory `StoreApi` for session and status tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use serde_json::Value;

use crate::api::{ApiError, ChatReply, ChatRequest, StoreApi};

/// Scripted backend: queued chat replies, fixed GET routes, fixed health.
pub(crate) struct MockApi {
    chat_replies: RefCell<VecDeque<Result<ChatReply, ApiError>>>,
    routes: HashMap<String, Result<Value, ApiError>>,
    health: Result<(), ApiError>,
    pub(crate) chat_requests: RefCell<Vec<ChatRequest>>,
    pub(crate) get_paths: RefCell<Vec<String>>,
}

impl MockApi {
    pub(crate) fn new() -> Self {
        Self {
            chat_replies: RefCell::new(VecDeque::new()),
            routes: HashMap::new(),
            health: Ok(()),
            chat_requests: RefCell::new(Vec::new()),
            get_paths: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn with_chat(self, reply: Result<ChatReply, ApiError>) -> Self {
        self.chat_replies.borrow_mut().push_back(reply);
        self
    }

    pub(crate) fn with_route(mut self, path: &str, result: Result<Value, ApiError>) -> Self {
        self.routes.insert(path.to_owned(), result);
        self
    }

    pub(crate) fn with_health(mut self, health: Result<(), ApiError>) -> Self {
        self.health = health;
        self
    }
}

pub(crate) fn reply(response: &str, history: Vec<Value>) -> ChatReply {
    ChatReply { response: response.to_owned(), conversation_history: Some(history) }
}

#[async_trait::async_trait(?Send)]
impl StoreApi for MockApi {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.chat_requests.borrow_mut().push(request.clone());
        self.chat_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(ApiError::Status(500)))
    }

    async fn health(&self) -> Result<(), ApiError> {
        self.health.clone()
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.get_paths.borrow_mut().push(path.to_owned());
        self.routes
            .get(path)
            .cloned()
            .unwrap_or(Err(ApiError::Status(404)))
    }
}

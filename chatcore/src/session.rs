//! Conversation session: one request at a time against the chat endpoint.
//!
//! DESIGN
//! ======
//! A send is split into [`ConversationSession::begin`] and
//! [`ConversationSession::complete`] so a reactive UI can hold the session
//! in a signal and release it across the network await. `begin` appends the
//! user turn and raises the loading flag; `complete` appends the reply (or
//! the fixed error notice) and always lowers the flag. [`send`] chains the
//! two for callers that can hold `&mut self` across the await.
//!
//! The backend owns the history: after every successful exchange the
//! stored history is replaced wholesale with what the server returned.
//!
//! [`send`]: ConversationSession::send

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde_json::Value;

use crate::api::{ApiError, ChatReply, ChatRequest, StoreApi};
use crate::transcript::Transcript;

/// Assistant turn text shown when a chat request fails.
pub const CHAT_ERROR_MESSAGE: &str =
    "Sorry, I encountered an error while processing your request. Please try again.";

/// Why a send was dropped without touching the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejected {
    #[error("message is empty")]
    Empty,
    #[error("a request is already in flight")]
    InFlight,
}

/// Result of a full [`ConversationSession::send`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing happened.
    Rejected(Rejected),
    /// An assistant reply was appended.
    Replied,
    /// The fixed error turn was appended.
    Failed,
}

/// Transcript, server-owned history, and the in-flight flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversationSession {
    transcript: Transcript,
    history: Vec<Value>,
    loading: bool,
}

impl ConversationSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// History exactly as the backend last returned it.
    #[must_use]
    pub fn history(&self) -> &[Value] {
        &self.history
    }

    /// `true` exactly while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a send: validate, append the user turn, raise the loading flag.
    ///
    /// Returns the request to issue. The caller should clear its input on
    /// `Ok` and must eventually pass the outcome to [`Self::complete`].
    ///
    /// # Errors
    ///
    /// [`Rejected::Empty`] for blank input and [`Rejected::InFlight`] while a
    /// request is pending. The session is unchanged in both cases.
    pub fn begin(&mut self, text: &str) -> Result<ChatRequest, Rejected> {
        let message = text.trim();
        if message.is_empty() {
            return Err(Rejected::Empty);
        }
        if self.loading {
            return Err(Rejected::InFlight);
        }

        self.transcript.push_user(message);
        self.loading = true;
        tracing::debug!(history_len = self.history.len(), "chat request started");

        Ok(ChatRequest { message: message.to_owned(), history: self.history.clone() })
    }

    /// Finish a send with the backend outcome. Always clears the loading flag.
    pub fn complete(&mut self, result: Result<ChatReply, ApiError>) -> SendOutcome {
        self.loading = false;
        match result {
            Ok(reply) => {
                self.transcript.push_assistant(reply.response);
                self.history = reply.conversation_history.unwrap_or_default();
                SendOutcome::Replied
            }
            Err(error) => {
                tracing::error!(%error, "error sending message");
                self.transcript.push_error(CHAT_ERROR_MESSAGE);
                SendOutcome::Failed
            }
        }
    }

    /// Send `text` and wait for the reply.
    pub async fn send<A>(&mut self, api: &A, text: &str) -> SendOutcome
    where
        A: StoreApi + ?Sized,
    {
        let request = match self.begin(text) {
            Ok(request) => request,
            Err(rejected) => return SendOutcome::Rejected(rejected),
        };
        let result = api.chat(&request).await;
        self.complete(result)
    }
}

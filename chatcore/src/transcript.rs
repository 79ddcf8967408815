//! Append-only chat transcript.
//!
//! Turns are created on each send and receive, never edited or removed,
//! and kept in chronological order. Each turn gets a sequence id so views
//! can key their rows.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use crate::format::{escape_html, format};

/// Who produced a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Row class, e.g. `user-message`.
    #[must_use]
    pub fn message_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Assistant => "assistant-message",
        }
    }

    /// Font Awesome avatar icon class.
    #[must_use]
    pub fn avatar_icon(self) -> &'static str {
        match self {
            Self::User => "fas fa-user",
            Self::Assistant => "fas fa-robot",
        }
    }
}

/// One rendered unit of the conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub id: u64,
    pub role: Role,
    pub text: String,
    pub is_error: bool,
}

impl Turn {
    /// Inner HTML of the turn's content container.
    ///
    /// Assistant replies go through the reply formatter; user input and
    /// error notices are shown as escaped text.
    #[must_use]
    pub fn body_html(&self) -> String {
        match self.role {
            Role::Assistant if !self.is_error => format(&self.text),
            _ => escape_html(&self.text),
        }
    }
}

/// Ordered list of turns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
    next_id: u64,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &Turn {
        self.push(Role::User, text.into(), false)
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) -> &Turn {
        self.push(Role::Assistant, text.into(), false)
    }

    /// Append an assistant turn flagged as an error.
    pub fn push_error(&mut self, text: impl Into<String>) -> &Turn {
        self.push(Role::Assistant, text.into(), true)
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    fn push(&mut self, role: Role, text: String, is_error: bool) -> &Turn {
        let id = self.next_id;
        self.next_id += 1;
        self.turns.push(Turn { id, role, text, is_error });
        &self.turns[self.turns.len() - 1]
    }
}

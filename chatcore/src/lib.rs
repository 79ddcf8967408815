//! Shared chat widget logic for the store assistant.
//!
//! This crate owns everything the browser widget and the terminal client
//! have in common: the reply formatter, the transcript model, the
//! conversation session, the store status probes, and the `StoreApi`
//! transport seam. It has no browser or runtime dependency; each surface
//! supplies its own `StoreApi` implementation.

pub mod api;
pub mod format;
pub mod prompts;
pub mod session;
pub mod status;
pub mod transcript;

#[cfg(test)]
#[path = "test_helpers.rs"]
pub(crate) mod test_helpers;

pub use api::{ApiError, ChatReply, ChatRequest, ListingKind, StoreApi};
pub use format::{Reply, format};
pub use session::{ConversationSession, Rejected, SendOutcome};
pub use transcript::{Role, Transcript, Turn};

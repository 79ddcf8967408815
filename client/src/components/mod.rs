//! Reusable UI components for the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `ChatState` and `StoreState` from context and never talk
//! to the network directly; sends go through `state::chat` and probes are
//! started by the page.

pub mod chat_input;
pub mod quick_actions;
pub mod status_panel;
pub mod store_info_modal;
pub mod transcript;

//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `chatcore::StoreApi` transport over `fetch` so the
//! shared session and status logic can run in the browser.

pub mod api;

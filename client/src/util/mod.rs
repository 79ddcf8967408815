//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps keyboard decisions out of the components so they can be tested
//! without a browser.

pub mod keys;

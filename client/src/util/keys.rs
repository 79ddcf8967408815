//! Keyboard shortcuts for the chat input and the store-info modal.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Enter sends the message; Shift+Enter inserts a newline. Enter pressed
/// while an IME composition is active only commits the composition.
pub fn is_submit(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

/// Escape dismisses the modal.
pub fn is_dismiss(key: &str) -> bool {
    key == "Escape"
}

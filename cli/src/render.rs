//! Terminal rendering of replies and status.

use chatcore::api::ListingKind;
use chatcore::format::classify;
use chatcore::status::StoreCounts;
use chatcore::transcript::Turn;

/// Text for a finished turn: assistant replies go through the formatter,
/// error turns print as-is.
pub fn turn_text(turn: &Turn) -> String {
    if turn.is_error { turn.text.clone() } else { classify(&turn.text).to_text() }
}

pub fn stats_text(counts: &StoreCounts) -> String {
    ListingKind::ALL
        .into_iter()
        .map(|kind| format!("{}: {}", kind.key(), counts.label(kind)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

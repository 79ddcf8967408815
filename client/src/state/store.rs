//! Store status state: connection indicator, stat counters, and the
//! store-info modal.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use chatcore::api::ListingKind;
use chatcore::status::{ConnectionStatus, Presence, StoreCounts, StoreInfoView};

/// Sidebar and modal state fed by the status probes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreState {
    pub counts: StoreCounts,
    pub connection: ConnectionStatus,
    pub info: StoreInfoView,
}

impl StoreState {
    /// Record a probe result. A failed probe leaves the counter unchanged.
    pub fn record_probe(&mut self, kind: ListingKind, presence: Option<Presence>) {
        if presence.is_some() {
            self.counts.set(kind, presence);
        }
    }

    /// Open the modal in its loading state.
    pub fn open_info(&mut self) {
        self.info = StoreInfoView::Loading;
    }

    /// Apply a finished store-info fetch. Ignored once the modal is closed.
    pub fn finish_info(&mut self, view: StoreInfoView) {
        if self.info.is_open() {
            self.info = view;
        }
    }

    pub fn close_info(&mut self) {
        self.info = StoreInfoView::Hidden;
    }
}

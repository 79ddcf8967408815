//! Connection indicator and store stat counters.

use chatcore::api::ListingKind;
use leptos::prelude::*;

use crate::state::store::StoreState;

/// Header badge showing whether the assistant backend answered its health
/// check.
#[component]
pub fn ConnectionBadge() -> impl IntoView {
    let store = expect_context::<RwSignal<StoreState>>();
    let status = move || store.with(|state| state.connection);

    view! {
        <div class=move || format!("connection-status {}", status().modifier())>
            <i class="fas fa-circle"></i>
            <span>{move || status().label()}</span>
        </div>
    }
}

/// Presence counters for products, orders, and customers.
#[component]
pub fn StoreStats() -> impl IntoView {
    let store = expect_context::<RwSignal<StoreState>>();

    view! {
        <div class="sidebar-section">
            <h3>"Store Overview"</h3>
            <div class="store-stats">
                {ListingKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <div class="stat-item">
                                <span class="stat-value" id=format!("{}-count", kind.key())>
                                    {move || store.with(|state| state.counts.label(kind))}
                                </span>
                                <span class="stat-label">{stat_label(kind)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn stat_label(kind: ListingKind) -> &'static str {
    match kind {
        ListingKind::Products => "Products",
        ListingKind::Orders => "Orders",
        ListingKind::Customers => "Customers",
    }
}

//! Chat page: sidebar with store status and shortcuts, main conversation
//! panel, and the store-info modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On hydrate it starts one presence probe per
//! listing and a health check. Each task updates its own slice of
//! `StoreState` when it finishes, so a slow probe never holds back the
//! others.

use leptos::prelude::*;

use crate::components::chat_input::ChatInput;
use crate::components::quick_actions::QuickActions;
use crate::components::status_panel::{ConnectionBadge, StoreStats};
use crate::components::store_info_modal::{StoreInfoButton, StoreInfoModal};
use crate::components::transcript::Transcript;
use crate::state::chat::ChatState;
use crate::state::store::StoreState;

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let store = expect_context::<RwSignal<StoreState>>();

    start_status_probes(store);

    let loading = move || chat.with(|state| state.session.is_loading());

    view! {
        <div class="app-container">
            <aside class="sidebar">
                <div class="sidebar-header">
                    <i class="fas fa-store"></i>
                    <h1>"Store Assistant"</h1>
                </div>
                <StoreStats/>
                <QuickActions/>
                <div class="sidebar-section">
                    <StoreInfoButton/>
                </div>
            </aside>

            <main class="chat-container">
                <header class="chat-header">
                    <h2>"Chat"</h2>
                    <ConnectionBadge/>
                </header>
                <Transcript/>
                <ChatInput/>
            </main>

            <div class="loading-overlay" class:active=loading>
                <div class="loading-spinner">
                    <i class="fas fa-spinner fa-spin"></i>
                </div>
            </div>

            <StoreInfoModal/>
        </div>
    }
}

/// Fire the startup probes. Server rendering leaves the placeholders.
fn start_status_probes(store: RwSignal<StoreState>) {
    #[cfg(feature = "hydrate")]
    {
        use chatcore::api::ListingKind;
        use chatcore::status::{check_connection, probe_presence};

        use crate::net::api::BrowserApi;

        for kind in ListingKind::ALL {
            leptos::task::spawn_local(async move {
                let presence = probe_presence(&BrowserApi, kind).await;
                store.update(|state| state.record_probe(kind, presence));
            });
        }

        leptos::task::spawn_local(async move {
            let status = check_connection(&BrowserApi).await;
            store.update(|state| state.connection = status);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = store;
    }
}

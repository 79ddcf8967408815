//! Store-info button and modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opening the modal shows a loading state and fetches the shop record.
//! The result replaces the loading state only if the modal is still open.
//! Close button, backdrop click, and Escape all dismiss it.

use chatcore::status::StoreInfoView;
use leptos::prelude::*;

use crate::state::store::StoreState;
use crate::util::keys::is_dismiss;

/// Sidebar button that opens the modal.
#[component]
pub fn StoreInfoButton() -> impl IntoView {
    let store = expect_context::<RwSignal<StoreState>>();

    view! {
        <button class="store-info-btn" on:click=move |_| open_store_info(store)>
            <i class="fas fa-info-circle"></i>
            <span>"Store Info"</span>
        </button>
    }
}

fn open_store_info(store: RwSignal<StoreState>) {
    store.update(StoreState::open_info);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = chatcore::status::fetch_store_info(&crate::net::api::BrowserApi).await;
        store.update(|state| state.finish_info(StoreInfoView::from_result(result)));
    });
}

/// Modal rendered while `StoreState::info` is open.
#[component]
pub fn StoreInfoModal() -> impl IntoView {
    let store = expect_context::<RwSignal<StoreState>>();
    let close = move || store.update(StoreState::close_info);
    let content_ref = NodeRef::<leptos::html::Div>::new();

    // Focus the dialog once it mounts so Escape reaches it.
    Effect::new(move || {
        if let Some(el) = content_ref.get() {
            #[cfg(feature = "hydrate")]
            {
                let _ = el.focus();
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = el;
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss(&ev.key()) {
            ev.prevent_default();
            close();
        }
    };

    view! {
        <Show when=move || store.with(|state| state.info.is_open())>
            <div class="modal active" on:click=move |_| close()>
                <div class="modal-content" node_ref=content_ref on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown tabindex="0">
                    <div class="modal-header">
                        <h2>"Store Information"</h2>
                        <button class="modal-close" on:click=move |_| close() title="Close">
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                    <div class="modal-body">
                        {move || match store.with(|state| state.info.clone()) {
                            StoreInfoView::Loading => {
                                view! {
                                    <div class="loading">
                                        <i class="fas fa-spinner fa-spin"></i>
                                        " Loading store information..."
                                    </div>
                                }
                                    .into_any()
                            }
                            StoreInfoView::Loaded(html) | StoreInfoView::Failed(html) => {
                                view! { <div inner_html=html></div> }.into_any()
                            }
                            StoreInfoView::Hidden => ().into_any(),
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

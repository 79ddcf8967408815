//! Message input with send button.

use leptos::prelude::*;

use crate::state::chat::{ChatState, Draft, send_draft};
use crate::util::keys::is_submit;

/// Multi-line input. Enter sends, Shift+Enter adds a newline, and Enter
/// that confirms an IME composition is left to the input method. The send
/// button is disabled and shows a spinner while a request is in flight.
#[component]
pub fn ChatInput() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let draft = expect_context::<RwSignal<Draft>>();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    let loading = move || chat.with(|state| state.session.is_loading());

    let do_send = move || {
        send_draft(chat, draft);
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit(&ev.key(), ev.shift_key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-input-container">
            <textarea
                class="chat-input"
                rows="1"
                placeholder="Ask about your store..."
                node_ref=input_ref
                prop:value=move || draft.with(|d| d.0.clone())
                on:input=move |ev| draft.set(Draft(event_target_value(&ev)))
                on:keydown=on_keydown
            ></textarea>
            <button class="send-btn" on:click=move |_| do_send() disabled=loading title="Send message">
                {move || {
                    if loading() {
                        view! { <i class="fas fa-spinner fa-spin"></i> }.into_any()
                    } else {
                        view! { <i class="fas fa-paper-plane"></i> }.into_any()
                    }
                }}
            </button>
        </div>
    }
}

//! Conversation transcript with welcome screen and typing indicator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `ConversationSession::transcript()` in order. Assistant bodies are
//! HTML produced by the response formatter; user and error bodies are
//! escaped text. The list scrolls to the newest turn after every change.

use chatcore::prompts::SUGGESTED_PROMPTS;
use chatcore::transcript::Turn;
use leptos::prelude::*;

use crate::state::chat::{ChatState, Draft, send_prompt};

/// Scrolling message list for the chat panel.
#[component]
pub fn Transcript() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Changes only when a turn is appended or the loading flag flips.
    let scroll_key = Memo::new(move |_| {
        chat.with(|state| (state.session.transcript().len(), state.session.is_loading()))
    });

    Effect::new(move || {
        let _ = scroll_key.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let turns = move || chat.with(|state| state.session.transcript().turns().to_vec());
    let is_empty = move || chat.with(|state| state.session.transcript().is_empty());

    view! {
        <div class="chat-messages" node_ref=messages_ref>
            <Show when=is_empty>
                <Welcome/>
            </Show>

            <For each=turns key=|turn| turn.id let:turn>
                <TurnView turn/>
            </For>

            {move || {
                chat.with(|state| state.session.is_loading())
                    .then(|| {
                        view! {
                            <div class="message assistant-message typing">
                                <div class="message-avatar">
                                    <i class="fas fa-robot"></i>
                                </div>
                                <div class="message-content">
                                    <div class="typing-indicator">
                                        <span></span>
                                        <span></span>
                                        <span></span>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// One rendered turn.
#[component]
fn TurnView(turn: Turn) -> impl IntoView {
    let class = format!("message {}", turn.role.message_class());
    let body = turn.body_html();

    view! {
        <div class=class>
            <div class="message-avatar">
                <i class=turn.role.avatar_icon()></i>
            </div>
            <div class="message-content" class:message-content--error=turn.is_error>
                <div class="message-body" inner_html=body></div>
            </div>
        </div>
    }
}

/// Greeting and suggested prompts shown before the first message.
#[component]
fn Welcome() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let draft = expect_context::<RwSignal<Draft>>();

    view! {
        <div class="welcome-message">
            <div class="welcome-icon">
                <i class="fas fa-store"></i>
            </div>
            <h2>"Welcome to your Store Assistant"</h2>
            <p>"Ask about your products, orders, and customers, or pick a suggestion to get started."</p>
            <div class="suggested-prompts">
                {SUGGESTED_PROMPTS
                    .iter()
                    .map(|&prompt| {
                        view! {
                            <button class="prompt-btn" data-prompt=prompt on:click=move |_| send_prompt(chat, draft, prompt)>
                                {prompt}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

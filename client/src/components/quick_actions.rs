//! Sidebar shortcuts that send canned messages.

use chatcore::prompts::QuickAction;
use leptos::prelude::*;

use crate::state::chat::{ChatState, Draft, run_quick_action};

#[component]
pub fn QuickActions() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let draft = expect_context::<RwSignal<Draft>>();

    view! {
        <div class="sidebar-section">
            <h3>"Quick Actions"</h3>
            <div class="quick-actions">
                {QuickAction::ALL
                    .into_iter()
                    .map(|action| {
                        view! {
                            <button
                                class="quick-action-btn"
                                data-action=action.key()
                                on:click=move |_| run_quick_action(chat, draft, action)
                            >
                                <i class=action.icon()></i>
                                <span>{action.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

//! Chat state: the conversation session, plus the draft in the input box
//! held in its own signal so typing never notifies transcript subscribers.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use chatcore::api::ChatRequest;
use chatcore::prompts::QuickAction;
use chatcore::session::ConversationSession;
use leptos::prelude::*;

/// State for the chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub session: ConversationSession,
}

/// Current contents of the message input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft(pub String);

/// Start sending `draft`. On success the draft is cleared and the request
/// to issue is returned; rejected sends leave both untouched.
pub fn submit(state: &mut ChatState, draft: &mut Draft) -> Option<ChatRequest> {
    let request = state.session.begin(&draft.0).ok()?;
    draft.0.clear();
    Some(request)
}

/// Send whatever is in the input box.
pub fn send_draft(chat: RwSignal<ChatState>, draft: RwSignal<Draft>) {
    let mut pending = draft.get_untracked();
    if let Some(request) = chat.try_update(|state| submit(state, &mut pending)).flatten() {
        draft.set(pending);
        dispatch(chat, request);
    }
}

/// Put a canned prompt in the input and send it. While a request is in
/// flight the prompt stays in the input.
pub fn send_prompt(chat: RwSignal<ChatState>, draft: RwSignal<Draft>, text: &'static str) {
    draft.set(Draft(text.to_owned()));
    send_draft(chat, draft);
}

/// Send the message behind a quick-action button.
pub fn run_quick_action(chat: RwSignal<ChatState>, draft: RwSignal<Draft>, action: QuickAction) {
    send_prompt(chat, draft, action.message());
}

/// Issue the request and feed the outcome back into the session.
fn dispatch(chat: RwSignal<ChatState>, request: ChatRequest) {
    #[cfg(feature = "hydrate")]
    {
        use chatcore::api::StoreApi;

        leptos::task::spawn_local(async move {
            let result = crate::net::api::BrowserApi.chat(&request).await;
            chat.update(|state| {
                state.session.complete(result);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        chat.update(|state| {
            state.session.complete(Err(chatcore::api::ApiError::Unavailable));
        });
    }
}

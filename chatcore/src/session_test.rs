use super::*;
use crate::test_helpers::{MockApi, reply};
use crate::transcript::Role;
use serde_json::json;

const SHIRT_REPLY: &str = r#"{"data":{"products":{"edges":[{"node":{"title":"Shirt","status":"ACTIVE","vendor":"Acme","productType":"Apparel","variants":{"edges":[{"node":{"price":"19.99"}}]}}}]}}}"#;

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_default_is_idle_and_empty() {
    let session = ConversationSession::default();
    assert!(!session.is_loading());
    assert!(session.transcript().is_empty());
    assert!(session.history().is_empty());
}

// =============================================================
// begin / complete
// =============================================================

#[test]
fn begin_rejects_blank_input() {
    let mut session = ConversationSession::new();
    assert_eq!(session.begin("   \n\t"), Err(Rejected::Empty));
    assert!(session.transcript().is_empty());
    assert!(!session.is_loading());
}

#[test]
fn begin_appends_user_turn_and_raises_flag() {
    let mut session = ConversationSession::new();
    let request = session.begin("  Show me my products  ").unwrap();

    assert_eq!(request.message, "Show me my products");
    assert!(request.history.is_empty());
    assert!(session.is_loading());
    let last = session.transcript().last().unwrap();
    assert_eq!(last.role, Role::User);
    assert_eq!(last.text, "Show me my products");
}

#[test]
fn begin_while_loading_is_a_no_op() {
    let mut session = ConversationSession::new();
    session.begin("first").unwrap();
    let before = session.clone();

    assert_eq!(session.begin("second"), Err(Rejected::InFlight));
    assert_eq!(session, before);
    assert_eq!(session.transcript().len(), 1);
}

#[test]
fn complete_success_replaces_history_with_server_value() {
    let mut session = ConversationSession::new();
    session.begin("hi").unwrap();
    session.complete(Ok(reply("hello", vec![json!({"role": "user", "content": "hi"})])));

    session.begin("again").unwrap();
    let server_history = vec![json!({"role": "system", "content": "reset"})];
    session.complete(Ok(reply("ok", server_history.clone())));

    assert_eq!(session.history(), server_history.as_slice());
}

#[test]
fn complete_with_missing_history_resets_to_empty() {
    let mut session = ConversationSession::new();
    session.begin("hi").unwrap();
    session.complete(Ok(reply("hello", vec![json!({"role": "user"})])));

    session.begin("again").unwrap();
    session.complete(Ok(ChatReply { response: "ok".to_owned(), conversation_history: None }));
    assert!(session.history().is_empty());
}

#[test]
fn complete_failure_appends_fixed_error_turn() {
    let mut session = ConversationSession::new();
    session.begin("hi").unwrap();
    let outcome = session.complete(Err(ApiError::Transport("connection refused".to_owned())));

    assert_eq!(outcome, SendOutcome::Failed);
    assert!(!session.is_loading());
    let last = session.transcript().last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert!(last.is_error);
    assert_eq!(last.text, CHAT_ERROR_MESSAGE);
    assert!(!last.text.contains("connection refused"));
}

// =============================================================
// send
// =============================================================

#[tokio::test]
async fn send_renders_product_reply_end_to_end() {
    let history = vec![json!({"role": "user", "content": "Show me my products"})];
    let api = MockApi::new().with_chat(Ok(reply(SHIRT_REPLY, history.clone())));
    let mut session = ConversationSession::new();

    let outcome = session.send(&api, "Show me my products").await;

    assert_eq!(outcome, SendOutcome::Replied);
    assert!(!session.is_loading());
    assert_eq!(session.history(), history.as_slice());
    let last = session.transcript().last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    let html = last.body_html();
    assert!(html.contains("<h4>Shirt</h4>"));
    assert!(html.contains("<strong>Status:</strong> ACTIVE"));
    assert!(html.contains("<strong>Vendor:</strong> Acme"));
    assert!(html.contains("<strong>Type:</strong> Apparel"));
    assert!(html.contains("<strong>Price:</strong> $19.99"));
}

#[tokio::test]
async fn send_passes_prior_history_verbatim() {
    let first_history = vec![json!({"role": "assistant", "content": "hello", "extra": [1, 2]})];
    let api = MockApi::new()
        .with_chat(Ok(reply("hello", first_history.clone())))
        .with_chat(Ok(reply("second", Vec::new())));
    let mut session = ConversationSession::new();

    session.send(&api, "one").await;
    session.send(&api, "two").await;

    let requests = api.chat_requests.borrow();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].history.is_empty());
    assert_eq!(requests[1].message, "two");
    assert_eq!(requests[1].history, first_history);
}

#[tokio::test]
async fn failed_send_adds_exactly_one_error_turn() {
    let api = MockApi::new().with_chat(Err(ApiError::Status(500)));
    let mut session = ConversationSession::new();

    let outcome = session.send(&api, "hello").await;

    assert_eq!(outcome, SendOutcome::Failed);
    assert_eq!(session.transcript().len(), 2);
    let error_turns = session.transcript().turns().iter().filter(|t| t.is_error).count();
    assert_eq!(error_turns, 1);
    assert!(!session.is_loading());
}

#[tokio::test]
async fn send_while_loading_does_not_hit_backend() {
    let api = MockApi::new().with_chat(Ok(reply("never", Vec::new())));
    let mut session = ConversationSession::new();
    session.begin("pending").unwrap();

    let outcome = session.send(&api, "second").await;

    assert_eq!(outcome, SendOutcome::Rejected(Rejected::InFlight));
    assert!(api.chat_requests.borrow().is_empty());
    assert_eq!(session.transcript().len(), 1);
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn blank_send_is_rejected() {
    let api = MockApi::new();
    let mut session = ConversationSession::new();
    assert_eq!(session.send(&api, "").await, SendOutcome::Rejected(Rejected::Empty));
    assert!(session.transcript().is_empty());
}

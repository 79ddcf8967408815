use super::*;

// =============================================================
// Transcript ordering
// =============================================================

#[test]
fn transcript_default_is_empty() {
    let transcript = Transcript::default();
    assert!(transcript.is_empty());
    assert!(transcript.last().is_none());
}

#[test]
fn turns_append_in_order_with_increasing_ids() {
    let mut transcript = Transcript::new();
    transcript.push_user("hello");
    transcript.push_assistant("hi");
    transcript.push_error("oops");

    let turns = transcript.turns();
    assert_eq!(turns.len(), 3);
    assert_eq!(turns.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[1].role, Role::Assistant);
    assert!(!turns[1].is_error);
    assert_eq!(turns[2].role, Role::Assistant);
    assert!(turns[2].is_error);
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn assistant_body_goes_through_formatter() {
    let mut transcript = Transcript::new();
    let turn = transcript.push_assistant(r#"{"data":{"orders":{"edges":[]}}}"#);
    assert_eq!(turn.body_html(), "No orders found.");
}

#[test]
fn user_body_is_escaped_not_formatted() {
    let mut transcript = Transcript::new();
    let turn = transcript.push_user(r#"{"data":{"orders":{"edges":[]}}} <b>"#);
    assert_eq!(
        turn.body_html(),
        "{&quot;data&quot;:{&quot;orders&quot;:{&quot;edges&quot;:[]}}} &lt;b&gt;"
    );
}

#[test]
fn role_classes_and_icons() {
    assert_eq!(Role::User.message_class(), "user-message");
    assert_eq!(Role::Assistant.message_class(), "assistant-message");
    assert_eq!(Role::User.avatar_icon(), "fas fa-user");
    assert_eq!(Role::Assistant.avatar_icon(), "fas fa-robot");
}

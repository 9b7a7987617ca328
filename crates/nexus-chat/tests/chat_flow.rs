//! End-to-end chat session tests over the public crate surface.

use nexus_chat::{ChatRole, ChatSession, ERROR_REPLY, INTRO_TEXT, JsonHistoryStore, SendOutcome};
use nexus_config::ChatSettings;
use nexus_test_utils::{FailingGenerator, RecordingGenerator, StreamingGenerator};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tempfile::tempdir;

/// A full conversation should persist across process restarts, with the
/// exact transcript restored.
#[tokio::test]
async fn conversation_survives_a_restart_and_continues() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("history.json");
    let store = Arc::new(JsonHistoryStore::new(&path).expect("store"));

    let generator = Arc::new(StreamingGenerator::with_text(["first ", "reply"]));
    let mut session = ChatSession::new(store.clone(), generator, ChatSettings::default());
    session.load();
    assert_eq!(
        session.send("opening question").await,
        SendOutcome::Completed {
            message_id: session.messages()[2].id
        }
    );

    // Simulate a restart: a fresh session over the same store.
    let generator = Arc::new(RecordingGenerator::new("second reply"));
    let mut resumed = ChatSession::new(store, generator.clone(), ChatSettings::default());
    resumed.load();
    let restored = resumed.messages();
    assert_eq!(restored.len(), 3);
    assert_eq!(restored[0].text, INTRO_TEXT);
    assert_eq!(restored[1].text, "opening question");
    assert_eq!(restored[2].text, "first reply");

    resumed.send("follow-up").await;
    // The restored transcript is replayed as history for the next turn.
    let requests = generator.requests();
    assert_eq!(requests[0].history.len(), 3);
    assert_eq!(requests[0].history[2].text, "first reply");
    assert_eq!(resumed.messages().len(), 5);
}

/// A failed turn leaves the transcript usable and a later turn succeeds.
#[tokio::test]
async fn session_recovers_after_a_failed_turn() {
    let temp = tempdir().expect("tempdir");
    let store = Arc::new(JsonHistoryStore::new(temp.path().join("history.json")).expect("store"));

    let mut session = ChatSession::new(
        store.clone(),
        Arc::new(FailingGenerator::new()),
        ChatSettings::default(),
    );
    session.load();
    assert_eq!(session.send("doomed").await, SendOutcome::Failed);
    let messages = session.messages();
    assert_eq!(messages.last().map(|m| m.text.clone()), Some(ERROR_REPLY.to_string()));
    assert_eq!(messages.last().map(|m| m.role), Some(ChatRole::Model));
    assert!(!session.is_typing());

    let mut recovered = ChatSession::new(
        store,
        Arc::new(StreamingGenerator::with_text(["back online"])),
        ChatSettings::default(),
    );
    recovered.load();
    assert_eq!(recovered.messages().len(), 3);
    let outcome = recovered.send("are you there?").await;
    assert!(matches!(outcome, SendOutcome::Completed { .. }));
    assert_eq!(
        recovered.messages().last().map(|m| m.text.clone()),
        Some("back online".to_string())
    );
}

//! Chat message model and the insertion-ordered message log.

use chrono::{DateTime, Utc};
use nexus_protocol::{MessageId, Source};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Introductory message seeded into an empty session.
pub const INTRO_TEXT: &str = "Hello. I am the Nexus Advanced Assistant. I can help you code, \
write content, or analyze business strategies. How can I assist you today?";

/// Speaker role for a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// User-authored message.
    User,
    /// Model-authored message.
    Model,
}

impl ChatRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// Message stored in the session transcript.
///
/// Text is mutable while a response streams in and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Globally unique identifier.
    pub id: MessageId,
    /// Role that produced the message.
    pub role: ChatRole,
    /// Message content.
    pub text: String,
    /// Timestamp for the message.
    pub timestamp: DateTime<Utc>,
    /// Grounding sources cited by the message.
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl ChatMessage {
    /// Build a message with a fresh identifier and the current timestamp.
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
            sources: Vec::new(),
        }
    }

    /// Build a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    /// Build the introductory model message.
    pub fn intro() -> Self {
        Self::new(ChatRole::Model, INTRO_TEXT)
    }

    /// Build an empty model message to receive streamed chunks.
    pub fn placeholder() -> Self {
        Self::new(ChatRole::Model, "")
    }
}

/// Insertion-ordered message log.
///
/// Messages live in a map keyed by identifier with the order tracked
/// separately, so in-place mutation by id can never collide even when
/// completions interleave.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    entries: HashMap<MessageId, ChatMessage>,
    order: Vec<MessageId>,
}

impl ChatLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from an ordered message list.
    pub fn from_messages(messages: Vec<ChatMessage>) -> Self {
        let mut log = Self::new();
        for message in messages {
            log.push(message);
        }
        log
    }

    /// Append a message, preserving insertion order.
    pub fn push(&mut self, message: ChatMessage) {
        self.order.push(message.id);
        self.entries.insert(message.id, message);
    }

    /// Mutable access to a message by identifier.
    pub fn get_mut(&mut self, id: &MessageId) -> Option<&mut ChatMessage> {
        self.entries.get_mut(id)
    }

    /// Number of messages in the log.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the log holds no messages.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Messages in insertion order.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).cloned())
            .collect()
    }

    /// The most recently appended message.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.order.last().and_then(|id| self.entries.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::{ChatLog, ChatMessage, ChatRole};
    use pretty_assertions::assert_eq;

    #[test]
    fn log_preserves_insertion_order() {
        let mut log = ChatLog::new();
        let first = ChatMessage::user("one");
        let second = ChatMessage::new(ChatRole::Model, "two");
        let third = ChatMessage::user("three");
        log.push(first.clone());
        log.push(second.clone());
        log.push(third.clone());

        let texts: Vec<String> = log.messages().into_iter().map(|m| m.text).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert_eq!(log.last().map(|m| m.id), Some(third.id));
    }

    #[test]
    fn mutation_by_id_updates_in_place() {
        let mut log = ChatLog::new();
        let placeholder = ChatMessage::placeholder();
        let id = placeholder.id;
        log.push(ChatMessage::user("question"));
        log.push(placeholder);

        log.get_mut(&id).expect("placeholder").text.push_str("answer");
        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[1].text, "answer");
    }

    #[test]
    fn round_trips_through_ordered_list() {
        let mut log = ChatLog::new();
        log.push(ChatMessage::intro());
        log.push(ChatMessage::user("hi"));
        let rebuilt = ChatLog::from_messages(log.messages());
        assert_eq!(rebuilt.messages(), log.messages());
    }

    #[test]
    fn message_serde_round_trips() {
        let message = ChatMessage::user("hello");
        let encoded = serde_json::to_string(&message).expect("serialize");
        let decoded: ChatMessage = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, message);
    }
}

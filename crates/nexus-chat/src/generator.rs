//! Seam to the external text-generation collaborator.

use crate::error::GeneratorError;
use crate::message::{ChatLog, ChatMessage};
use async_trait::async_trait;
use futures_util::Stream;
use nexus_config::ChatSettings;
use nexus_protocol::StreamChunk;
use std::pin::Pin;

/// One prior turn in the role/text history shape sent to the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Role name, `"user"` or `"model"`.
    pub role: String,
    /// Message text.
    pub text: String,
}

impl From<&ChatMessage> for HistoryEntry {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role.as_str().to_string(),
            text: message.text.clone(),
        }
    }
}

/// Convert a log into the history shape sent with a chat request.
pub(crate) fn history_from_log(log: &ChatLog) -> Vec<HistoryEntry> {
    log.messages().iter().map(HistoryEntry::from).collect()
}

/// Ordered sequence of response chunks for one chat turn.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<StreamChunk, GeneratorError>> + Send>>;

/// External text-generation collaborator.
///
/// Two request shapes: one-shot prompt-in/text-out, and a chat completion
/// that returns an ordered stream of partial-text/metadata chunks.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a single text blob for a prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;

    /// Generate a single JSON document for a prompt. Providers that can
    /// request a JSON response format override this; the default just
    /// delegates to [`TextGenerator::generate`].
    async fn generate_json(&self, prompt: &str) -> Result<String, GeneratorError> {
        self.generate(prompt).await
    }

    /// Start a chat turn: prior history, the new user text, and the current
    /// assistant settings. Chunk ordering is guaranteed within the stream.
    async fn chat_stream(
        &self,
        history: Vec<HistoryEntry>,
        message: &str,
        settings: &ChatSettings,
    ) -> Result<ChunkStream, GeneratorError>;
}

#[cfg(test)]
mod tests {
    use super::{HistoryEntry, history_from_log};
    use crate::message::{ChatLog, ChatMessage, ChatRole};
    use pretty_assertions::assert_eq;

    #[test]
    fn history_entries_mirror_the_log() {
        let mut log = ChatLog::new();
        log.push(ChatMessage::new(ChatRole::Model, "welcome"));
        log.push(ChatMessage::user("question"));

        let history = history_from_log(&log);
        assert_eq!(
            history,
            vec![
                HistoryEntry {
                    role: "model".to_string(),
                    text: "welcome".to_string(),
                },
                HistoryEntry {
                    role: "user".to_string(),
                    text: "question".to_string(),
                },
            ]
        );
    }
}

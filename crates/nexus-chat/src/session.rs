//! Chat session: the message log plus the streaming send state machine.

use crate::error::HistoryError;
use crate::generator::{TextGenerator, history_from_log};
use crate::history::HistoryStore;
use crate::message::{ChatLog, ChatMessage};
use futures_util::StreamExt;
use log::{debug, info, warn};
use nexus_config::ChatSettings;
use nexus_protocol::{MessageId, Source};
use std::sync::Arc;

/// Fixed reply appended when a turn fails for any reason.
pub const ERROR_REPLY: &str = "ERR: Quantum decoherence detected. Please retry.";

/// Result of a [`ChatSession::send`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The response finished streaming into the identified message.
    Completed {
        /// Identifier of the model message that received the response.
        message_id: MessageId,
    },
    /// The turn failed and the fixed error reply was appended.
    Failed,
    /// The input was ignored (blank text, or a turn already in flight).
    Ignored,
}

/// Conversation state for the assistant.
///
/// One turn is in flight at a time. The transcript is persisted after
/// every change, and persistence failures are logged rather than
/// surfaced, so a broken disk never breaks the conversation.
pub struct ChatSession {
    log: ChatLog,
    store: Arc<dyn HistoryStore>,
    generator: Arc<dyn TextGenerator>,
    settings: ChatSettings,
    typing: bool,
}

impl ChatSession {
    /// Create a session with an empty log.
    pub fn new(
        store: Arc<dyn HistoryStore>,
        generator: Arc<dyn TextGenerator>,
        settings: ChatSettings,
    ) -> Self {
        Self {
            log: ChatLog::new(),
            store,
            generator,
            settings,
            typing: false,
        }
    }

    /// Restore the transcript from the store, seeding the introductory
    /// message when nothing usable is persisted.
    ///
    /// A corrupt history file is treated as absence: it is cleared on a
    /// best-effort basis and the session starts fresh.
    pub fn load(&mut self) {
        match self.store.load() {
            Ok(Some(messages)) if !messages.is_empty() => {
                info!("restored chat history (messages={})", messages.len());
                self.log = ChatLog::from_messages(messages);
                return;
            }
            Ok(_) => {
                debug!("no usable chat history, seeding intro");
            }
            Err(HistoryError::Corrupt(err)) => {
                warn!("discarding corrupt chat history ({err})");
                if let Err(err) = self.store.clear() {
                    warn!("failed to clear corrupt history ({err})");
                }
            }
            Err(err) => {
                warn!("failed to load chat history ({err})");
            }
        }
        self.log = ChatLog::new();
        self.log.push(ChatMessage::intro());
        self.persist();
    }

    /// Send one user message and stream the reply into the log.
    ///
    /// Blank input and input sent while a turn is in flight are ignored.
    /// On failure the fixed error reply is appended instead of a response.
    pub async fn send(&mut self, text: &str) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() || self.typing {
            return SendOutcome::Ignored;
        }

        // History is captured before the new message joins the log.
        let history = history_from_log(&self.log);
        self.log.push(ChatMessage::user(text));
        self.typing = true;

        let stream = self
            .generator
            .chat_stream(history, text, &self.settings)
            .await;
        let mut stream = match stream {
            Ok(stream) => stream,
            Err(err) => {
                warn!("chat request failed ({err})");
                return self.fail_turn();
            }
        };

        let placeholder = ChatMessage::placeholder();
        let message_id = placeholder.id;
        self.log.push(placeholder);

        let mut sources: Vec<Source> = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(err) => {
                    warn!("chat stream failed mid-response ({err})");
                    return self.fail_turn();
                }
            };
            for source in chunk.sources {
                if !sources.iter().any(|s| s.uri == source.uri) {
                    sources.push(source);
                }
            }
            if let Some(message) = self.log.get_mut(&message_id) {
                if let Some(text) = &chunk.text {
                    message.text.push_str(text);
                }
                message.sources = sources.clone();
            }
        }

        self.typing = false;
        self.persist();
        debug!("chat turn completed (message_id={message_id})");
        SendOutcome::Completed { message_id }
    }

    /// Drop the transcript and start over with only the intro message.
    pub fn reset(&mut self) {
        info!("resetting chat session");
        self.log = ChatLog::new();
        self.log.push(ChatMessage::intro());
        if let Err(err) = self.store.clear() {
            warn!("failed to clear persisted history ({err})");
        }
        self.typing = false;
    }

    /// Messages in insertion order.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.log.messages()
    }

    /// Whether a turn is currently in flight.
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Current assistant settings.
    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Mutable access to the assistant settings.
    pub fn settings_mut(&mut self) -> &mut ChatSettings {
        &mut self.settings
    }

    fn fail_turn(&mut self) -> SendOutcome {
        self.log.push(ChatMessage::new(
            crate::message::ChatRole::Model,
            ERROR_REPLY,
        ));
        self.typing = false;
        self.persist();
        SendOutcome::Failed
    }

    fn persist(&self) {
        if self.log.is_empty() {
            return;
        }
        if let Err(err) = self.store.save(&self.log.messages()) {
            warn!("failed to persist chat history ({err})");
        }
    }
}

// The session tests live in tests/session.rs: they rely on the mock
// generators from nexus-test-utils, which depends on this crate, so they
// must link against the library build rather than the unit-test build.

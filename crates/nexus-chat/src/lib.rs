//! Chat session state machine for the Nexus assistant.
//!
//! Owns the ordered message log, its persistence to a single JSON history
//! file, and the seam to the external text-generation collaborator.

mod error;
mod generator;
mod history;
mod message;
mod session;

pub use error::{GeneratorError, HistoryError};
pub use generator::{ChunkStream, HistoryEntry, TextGenerator};
pub use history::{HistoryStore, JsonHistoryStore};
pub use message::{ChatLog, ChatMessage, ChatRole, INTRO_TEXT};
pub use session::{ChatSession, ERROR_REPLY, SendOutcome};

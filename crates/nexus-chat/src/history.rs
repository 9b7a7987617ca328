//! Chat history persistence: a single JSON file holding the ordered
//! message array. There is no schema version field; an unparsable file is
//! reported distinctly so the session can treat it as absence and clear it.

use crate::error::HistoryError;
use crate::message::ChatMessage;
use log::{debug, info};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistent store abstraction for the chat transcript.
pub trait HistoryStore: Send + Sync {
    /// Load the persisted transcript; `None` when nothing is stored.
    fn load(&self) -> Result<Option<Vec<ChatMessage>>, HistoryError>;
    /// Replace the persisted transcript.
    fn save(&self, messages: &[ChatMessage]) -> Result<(), HistoryError>;
    /// Erase the persisted transcript.
    fn clear(&self) -> Result<(), HistoryError>;
}

/// JSON-file-backed history store.
pub struct JsonHistoryStore {
    /// Path of the history file.
    path: PathBuf,
    /// Serialize write access to the file.
    write_lock: Mutex<()>,
}

impl JsonHistoryStore {
    /// Create a store at the given path, creating parent directories.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        info!("initialized history store (path={})", path.display());
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonHistoryStore {
    /// Load the transcript from the history file.
    fn load(&self) -> Result<Option<Vec<ChatMessage>>, HistoryError> {
        if !self.path.exists() {
            debug!("no persisted history (path={})", self.path.display());
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let messages: Vec<ChatMessage> = serde_json::from_str(&contents)?;
        debug!(
            "loaded history (path={}, messages={})",
            self.path.display(),
            messages.len()
        );
        Ok(Some(messages))
    }

    /// Overwrite the history file with the given transcript.
    fn save(&self, messages: &[ChatMessage]) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock();
        let encoded = serde_json::to_string(messages)?;
        fs::write(&self.path, encoded)?;
        debug!(
            "saved history (path={}, messages={})",
            self.path.display(),
            messages.len()
        );
        Ok(())
    }

    /// Remove the history file if present.
    fn clear(&self) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock();
        if self.path.exists() {
            info!("clearing history (path={})", self.path.display());
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

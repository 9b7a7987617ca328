//! Mock [`TextGenerator`] implementations.

use async_trait::async_trait;
use futures_util::stream;
use nexus_chat::{ChunkStream, GeneratorError, HistoryEntry, TextGenerator};
use nexus_config::ChatSettings;
use nexus_protocol::{Source, StreamChunk};
use parking_lot::Mutex;

/// Generator that answers every request with the same text.
#[derive(Debug, Clone)]
pub struct FixedGenerator {
    response: String,
}

impl FixedGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for FixedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
        Ok(self.response.clone())
    }

    async fn chat_stream(
        &self,
        _history: Vec<HistoryEntry>,
        _message: &str,
        _settings: &ChatSettings,
    ) -> Result<ChunkStream, GeneratorError> {
        let chunk = StreamChunk::text(self.response.clone());
        Ok(Box::pin(stream::iter(vec![Ok(chunk)])))
    }
}

/// Generator that streams a scripted sequence of chunks.
#[derive(Debug, Clone, Default)]
pub struct StreamingGenerator {
    chunks: Vec<StreamChunk>,
    /// Error the stream with this message after the scripted chunks.
    fail_with: Option<String>,
}

impl StreamingGenerator {
    /// Stream the given text deltas, one per chunk.
    pub fn with_text<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            chunks: chunks.into_iter().map(StreamChunk::text).collect(),
            fail_with: None,
        }
    }

    /// Stream text deltas paired with grounding sources.
    pub fn with_chunks<S>(chunks: Vec<(S, Vec<Source>)>) -> Self
    where
        S: Into<String>,
    {
        Self {
            chunks: chunks
                .into_iter()
                .map(|(text, sources)| StreamChunk {
                    text: Some(text.into()),
                    sources,
                })
                .collect(),
            fail_with: None,
        }
    }

    /// Terminate the stream with an error after the scripted chunks.
    pub fn then_fail(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }
}

#[async_trait]
impl TextGenerator for StreamingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
        Ok(self
            .chunks
            .iter()
            .filter_map(|chunk| chunk.text.clone())
            .collect())
    }

    async fn chat_stream(
        &self,
        _history: Vec<HistoryEntry>,
        _message: &str,
        _settings: &ChatSettings,
    ) -> Result<ChunkStream, GeneratorError> {
        let mut items: Vec<Result<StreamChunk, GeneratorError>> =
            self.chunks.iter().cloned().map(Ok).collect();
        if let Some(message) = &self.fail_with {
            items.push(Err(GeneratorError::Stream(message.clone())));
        }
        Ok(Box::pin(stream::iter(items)))
    }
}

/// One chat request as seen by a [`RecordingGenerator`].
#[derive(Debug, Clone)]
pub struct RecordedChat {
    pub history: Vec<HistoryEntry>,
    pub message: String,
    pub settings: ChatSettings,
}

/// Generator that records every chat request and answers with a fixed
/// single-chunk response.
pub struct RecordingGenerator {
    response: String,
    requests: Mutex<Vec<RecordedChat>>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            requests: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Chat requests seen so far, in order.
    pub fn requests(&self) -> Vec<RecordedChat> {
        self.requests.lock().clone()
    }

    /// One-shot prompts seen so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        self.prompts.lock().push(prompt.to_string());
        Ok(self.response.clone())
    }

    async fn chat_stream(
        &self,
        history: Vec<HistoryEntry>,
        message: &str,
        settings: &ChatSettings,
    ) -> Result<ChunkStream, GeneratorError> {
        self.requests.lock().push(RecordedChat {
            history,
            message: message.to_string(),
            settings: settings.clone(),
        });
        let chunk = StreamChunk::text(self.response.clone());
        Ok(Box::pin(stream::iter(vec![Ok(chunk)])))
    }
}

/// Generator that fails every request.
#[derive(Debug, Clone)]
pub struct FailingGenerator {
    message: String,
}

impl FailingGenerator {
    pub fn new() -> Self {
        Self::with_message("mock failure")
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
        Err(GeneratorError::Provider(self.message.clone()))
    }

    async fn chat_stream(
        &self,
        _history: Vec<HistoryEntry>,
        _message: &str,
        _settings: &ChatSettings,
    ) -> Result<ChunkStream, GeneratorError> {
        Err(GeneratorError::Provider(self.message.clone()))
    }
}

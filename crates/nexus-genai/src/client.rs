//! Gemini REST client implementing [`TextGenerator`].

use crate::wire::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ThinkingConfig,
    Tool,
};
use async_trait::async_trait;
use futures_util::{StreamExt, stream};
use log::debug;
use nexus_chat::{ChunkStream, GeneratorError, HistoryEntry, TextGenerator};
use nexus_config::ChatSettings;
use nexus_protocol::StreamChunk;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Token budget used when extended reasoning is enabled.
const THINKING_BUDGET: u32 = 4096;

/// Client for the Gemini `generateContent` family of endpoints.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    system_instruction: Option<String>,
}

impl GeminiClient {
    /// Create a client for the given credential and model name.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            system_instruction: None,
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Attach a system instruction sent with every chat request.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    fn endpoint(&self, verb: &str) -> String {
        format!("{}/v1beta/models/{}:{verb}", self.base_url, self.model)
    }

    async fn send(
        &self,
        verb: &str,
        request: &GenerateContentRequest,
    ) -> Result<reqwest::Response, GeneratorError> {
        debug!("sending generation request (model={}, verb={verb})", self.model);
        let response = self
            .http
            .post(self.endpoint(verb))
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|err| GeneratorError::Provider(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Provider(format!(
                "http {status}: {}",
                truncate(&body)
            )));
        }
        Ok(response)
    }

    async fn generate_with_config(
        &self,
        prompt: &str,
        config: Option<GenerationConfig>,
    ) -> Result<String, GeneratorError> {
        let request = GenerateContentRequest {
            contents: vec![Content::with_role("user", prompt)],
            generation_config: config,
            ..Default::default()
        };
        let response = self.send("generateContent", &request).await?;
        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| GeneratorError::InvalidResponse(err.to_string()))?;
        Ok(body.text())
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        self.generate_with_config(prompt, None).await
    }

    async fn generate_json(&self, prompt: &str) -> Result<String, GeneratorError> {
        let config = GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            ..Default::default()
        };
        self.generate_with_config(prompt, Some(config)).await
    }

    async fn chat_stream(
        &self,
        history: Vec<HistoryEntry>,
        message: &str,
        settings: &ChatSettings,
    ) -> Result<ChunkStream, GeneratorError> {
        let mut contents: Vec<Content> = history
            .into_iter()
            .map(|entry| Content::with_role(entry.role, entry.text))
            .collect();
        contents.push(Content::with_role("user", message));

        let request = GenerateContentRequest {
            contents,
            system_instruction: self.system_instruction.clone().map(Content::text),
            generation_config: Some(GenerationConfig {
                temperature: Some(settings.creativity),
                thinking_config: settings.enable_thinking.then_some(ThinkingConfig {
                    thinking_budget: THINKING_BUDGET,
                }),
                response_mime_type: None,
            }),
            tools: if settings.enable_search {
                vec![Tool::google_search()]
            } else {
                Vec::new()
            },
        };

        let response = self.send("streamGenerateContent?alt=sse", &request).await?;
        let state = (Box::pin(response.bytes_stream()), String::new());
        let chunks = stream::unfold(state, |(mut body, mut buffer)| async move {
            loop {
                if let Some(pos) = buffer.find('\n') {
                    let line: String = buffer.drain(..=pos).collect();
                    match parse_sse_line(&line) {
                        Some(item) => return Some((item, (body, buffer))),
                        None => continue,
                    }
                }
                match body.next().await {
                    Some(Ok(bytes)) => buffer.push_str(&String::from_utf8_lossy(&bytes)),
                    Some(Err(err)) => {
                        return Some((
                            Err(GeneratorError::Stream(err.to_string())),
                            (body, buffer),
                        ));
                    }
                    None => {
                        if buffer.is_empty() {
                            return None;
                        }
                        // Trailing event without a final newline.
                        let line = std::mem::take(&mut buffer);
                        return parse_sse_line(&line).map(|item| (item, (body, buffer)));
                    }
                }
            }
        });
        Ok(Box::pin(chunks))
    }
}

/// Decode one server-sent-event line into a chunk, skipping keep-alives,
/// non-data lines, and the end-of-stream marker.
fn parse_sse_line(line: &str) -> Option<Result<StreamChunk, GeneratorError>> {
    let data = line.trim_start().strip_prefix("data:")?.trim();
    if data.is_empty() || data == "[DONE]" {
        return None;
    }
    match serde_json::from_str::<GenerateContentResponse>(data) {
        Ok(response) => {
            let chunk = response.into_chunk();
            (!chunk.is_empty()).then_some(Ok(chunk))
        }
        Err(err) => Some(Err(GeneratorError::InvalidResponse(err.to_string()))),
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::{GeminiClient, parse_sse_line};
    use nexus_chat::GeneratorError;
    use pretty_assertions::assert_eq;

    #[test]
    fn data_lines_become_chunks() {
        let line = r#"data: {"candidates":[{"content":{"parts":[{"text":"hello"}]}}]}"#;
        let chunk = parse_sse_line(line).expect("chunk").expect("ok");
        assert_eq!(chunk.text.as_deref(), Some("hello"));
        assert!(chunk.sources.is_empty());
    }

    #[test]
    fn grounding_metadata_is_carried_through() {
        let line = concat!(
            r#"data: {"candidates":[{"content":{"parts":[{"text":"x"}]},"#,
            r#""groundingMetadata":{"groundingChunks":[{"web":{"title":"T","uri":"https://t"}}]}}]}"#,
        );
        let chunk = parse_sse_line(line).expect("chunk").expect("ok");
        assert_eq!(chunk.sources.len(), 1);
        assert_eq!(chunk.sources[0].uri, "https://t");
    }

    #[test]
    fn control_lines_are_skipped() {
        assert!(parse_sse_line("").is_none());
        assert!(parse_sse_line(": keep-alive").is_none());
        assert!(parse_sse_line("event: ping").is_none());
        assert!(parse_sse_line("data: [DONE]").is_none());
        assert!(parse_sse_line("data: ").is_none());
    }

    #[test]
    fn malformed_data_is_an_invalid_response() {
        match parse_sse_line("data: {broken") {
            Some(Err(GeneratorError::InvalidResponse(_))) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn endpoint_includes_model_and_verb() {
        let client = GeminiClient::new("key", "gemini-2.5-flash");
        assert_eq!(
            client.endpoint("generateContent"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}

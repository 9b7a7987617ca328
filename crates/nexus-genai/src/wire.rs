//! Request and response bodies for the Gemini REST API.

use nexus_protocol::{Source, StreamChunk};
use serde::{Deserialize, Serialize};

/// Body for `generateContent` and `streamGenerateContent`.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tools: Vec<Tool>,
}

/// One conversation entry: an optional role plus text parts.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-part entry with the given role.
    pub fn with_role(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// A single-part entry without a role, used for system instructions.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// Sampling and reasoning knobs.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

/// Extended-reasoning budget, in tokens.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: u32,
}

/// Tool declaration; only web-search grounding is used.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_search: GoogleSearch,
}

impl Tool {
    pub fn google_search() -> Self {
        Self {
            google_search: GoogleSearch {},
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GoogleSearch {}

/// Response body, shared by the one-shot and streaming endpoints.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebSource>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WebSource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Web grounding sources of the first candidate.
    pub fn sources(&self) -> Vec<Source> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .filter_map(|web| {
                        let uri = web.uri.clone()?;
                        Some(Source {
                            title: web.title.clone().unwrap_or_else(|| uri.clone()),
                            uri,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Convert one streamed response into a protocol chunk.
    pub fn into_chunk(self) -> StreamChunk {
        let text = self.text();
        StreamChunk {
            text: (!text.is_empty()).then_some(text),
            sources: self.sources(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
        ThinkingConfig, Tool,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_serializes_in_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content::with_role("user", "hi")],
            system_instruction: Some(Content::text("be helpful")),
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: 4096,
                }),
                response_mime_type: None,
            }),
            tools: vec![Tool::google_search()],
        };

        let encoded = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            encoded,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "hi"}]}],
                "systemInstruction": {"parts": [{"text": "be helpful"}]},
                "generationConfig": {
                    "temperature": 0.7,
                    "thinkingConfig": {"thinkingBudget": 4096},
                },
                "tools": [{"googleSearch": {}}],
            })
        );
    }

    #[test]
    fn empty_optionals_are_omitted() {
        let request = GenerateContentRequest {
            contents: vec![Content::with_role("user", "hi")],
            ..Default::default()
        };
        let encoded = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            encoded,
            json!({"contents": [{"role": "user", "parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Hello"}, {"text": " world"}]},
            }]
        }))
        .expect("parse");
        assert_eq!(response.text(), "Hello world");
        assert_eq!(response.sources(), vec![]);
    }

    #[test]
    fn response_extracts_web_grounding() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"parts": [{"text": "answer"}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"title": "Example", "uri": "https://example.com"}},
                        {"web": {"uri": "https://no-title.example"}},
                        {"web": {"title": "no uri"}},
                        {},
                    ]
                }
            }]
        }))
        .expect("parse");

        let sources = response.sources();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].title, "Example");
        assert_eq!(sources[0].uri, "https://example.com");
        // A missing title falls back to the URI; a missing URI drops the entry.
        assert_eq!(sources[1].title, "https://no-title.example");
    }

    #[test]
    fn empty_response_becomes_an_empty_chunk() {
        let response = GenerateContentResponse::default();
        assert!(response.into_chunk().is_empty());
    }
}

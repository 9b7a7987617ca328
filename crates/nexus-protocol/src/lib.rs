//! Shared types crossing Nexus crate boundaries: views, citation sources,
//! and streamed generation chunks.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a chat message.
pub type MessageId = Uuid;

/// Navigation surface: the fixed set of views the application can show.
///
/// Selected via in-memory state only; there is no URL routing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    /// Landing page.
    #[default]
    Home,
    /// Legacy resource directory.
    Directory,
    /// Digital asset marketplace.
    Marketplace,
    /// Blog feed.
    Blog,
    /// Autonomous agent dashboard.
    Agents,
    /// Content creation studio.
    Studio,
    /// Product intelligence hub.
    ProductHub,
}

impl ViewId {
    /// All views, in sidebar order.
    pub const ALL: [ViewId; 7] = [
        ViewId::Home,
        ViewId::Directory,
        ViewId::Marketplace,
        ViewId::Blog,
        ViewId::Agents,
        ViewId::Studio,
        ViewId::ProductHub,
    ];

    /// Return the view as a kebab-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Directory => "directory",
            ViewId::Marketplace => "marketplace",
            ViewId::Blog => "blog",
            ViewId::Agents => "agents",
            ViewId::Studio => "studio",
            ViewId::ProductHub => "product-hub",
        }
    }

    /// Parse a view from a kebab-case string, falling back to `Home`.
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == value)
            .unwrap_or(ViewId::Home)
    }
}

impl FromStr for ViewId {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(ViewId::parse(value))
    }
}

/// Grounding/citation source attached to a generated response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    /// Human-readable title of the reference.
    pub title: String,
    /// URI of the reference.
    pub uri: String,
}

/// One logical chunk of a streamed generation response.
///
/// A chunk may carry a text delta, grounding metadata, or both.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StreamChunk {
    /// Text delta for this chunk, if any.
    #[serde(default)]
    pub text: Option<String>,
    /// Grounding sources reported with this chunk.
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl StreamChunk {
    /// Build a text-only chunk.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            sources: Vec::new(),
        }
    }

    /// Build a chunk carrying only grounding sources.
    pub fn sources(sources: Vec<Source>) -> Self {
        Self {
            text: None,
            sources,
        }
    }

    /// Whether the chunk carries neither text nor sources.
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().is_none_or(str::is_empty) && self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Source, StreamChunk, ViewId};
    use pretty_assertions::assert_eq;

    #[test]
    fn view_id_parses_and_formats() {
        for view in ViewId::ALL {
            assert_eq!(ViewId::parse(view.as_str()), view);
        }
        assert_eq!(ViewId::parse("not-a-view"), ViewId::Home);
    }

    #[test]
    fn view_id_serde_uses_kebab_case() {
        let encoded = serde_json::to_string(&ViewId::ProductHub).expect("serialize");
        assert_eq!(encoded, "\"product-hub\"");
        let decoded: ViewId = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, ViewId::ProductHub);
    }

    #[test]
    fn stream_chunk_round_trips_through_json() {
        let chunk = StreamChunk {
            text: Some("partial".to_string()),
            sources: vec![Source {
                title: "Example".to_string(),
                uri: "https://example.com".to_string(),
            }],
        };
        let encoded = serde_json::to_string(&chunk).expect("serialize");
        let decoded: StreamChunk = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, chunk);
    }

    #[test]
    fn stream_chunk_emptiness() {
        assert!(StreamChunk::default().is_empty());
        assert!(StreamChunk::text("").is_empty());
        assert!(!StreamChunk::text("x").is_empty());
        assert!(
            !StreamChunk::sources(vec![Source {
                title: "t".to_string(),
                uri: "u".to_string(),
            }])
            .is_empty()
        );
    }
}

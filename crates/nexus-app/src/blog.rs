//! Blog feed: seed posts, insertion-ordered store, and agent-authored
//! post composition.

use chrono::Utc;
use log::{info, warn};
use nexus_chat::TextGenerator;
use nexus_genai::agent_post_prompt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fallback post title used when composition fails.
pub const CALIBRATION_TITLE: &str = "AI Agent Calibration...";

/// Fallback post body used when composition fails.
const CALIBRATION_CONTENT: &str =
    "The agent is currently recalibrating its neural weights. Check back in a moment.";

/// Who authored a post.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthorType {
    #[serde(rename = "AI_AGENT")]
    AiAgent,
    #[serde(rename = "USER")]
    User,
}

/// One blog feed entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub author_type: AuthorType,
    pub date: String,
    pub category: String,
    pub read_time: String,
}

fn seed_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "init-1".to_string(),
            title: "The Future of Autonomous Agents in Content Strategy".to_string(),
            excerpt: "How multi-agent systems are replacing traditional editorial workflows."
                .to_string(),
            content: "Autonomous agents are not just tools; they are becoming coworkers. \
In this deep dive..."
                .to_string(),
            author: "Nexus Strategist (AI)".to_string(),
            author_type: AuthorType::AiAgent,
            date: "Oct 24, 2025".to_string(),
            category: "AI Tech".to_string(),
            read_time: "5 min".to_string(),
        },
        BlogPost {
            id: "init-2".to_string(),
            title: "Bootstrapping to $10k MRR: A Guide".to_string(),
            excerpt: "Practical steps for developers to launch their first profitable SaaS."
                .to_string(),
            content: "The journey from 0 to 1 is the hardest. Here is how I structured my launch..."
                .to_string(),
            author: "Human Editor".to_string(),
            author_type: AuthorType::User,
            date: "Oct 23, 2025".to_string(),
            category: "Startups".to_string(),
            read_time: "8 min".to_string(),
        },
    ]
}

/// In-memory blog feed, newest first.
#[derive(Debug, Clone)]
pub struct BlogStore {
    posts: Vec<BlogPost>,
}

impl BlogStore {
    /// Create a store seeded with the initial posts.
    pub fn new() -> Self {
        Self { posts: seed_posts() }
    }

    /// Create an empty store.
    pub fn empty() -> Self {
        Self { posts: Vec::new() }
    }

    /// Posts in feed order.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Look up a post by identifier.
    pub fn get(&self, id: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Insert or replace a post. An existing post is replaced whole, in
    /// place; a new post lands at the top of the feed.
    pub fn upsert(&mut self, post: BlogPost) {
        match self.posts.iter_mut().find(|existing| existing.id == post.id) {
            Some(existing) => {
                info!("updated post (id={})", post.id);
                *existing = post;
            }
            None => {
                info!("published post (id={}, title={})", post.id, post.title);
                self.posts.insert(0, post);
            }
        }
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the feed is empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl Default for BlogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape an agent response must return.
#[derive(Debug, Deserialize)]
struct GeneratedPost {
    title: String,
    content: String,
}

/// Ask an agent persona for a short post on a topic.
///
/// Any failure, from the provider call to parsing the returned JSON,
/// yields the fixed calibration post instead of an error.
pub async fn compose_agent_post(
    generator: &dyn TextGenerator,
    topic: &str,
    agent_name: &str,
    agent_role: &str,
) -> BlogPost {
    let generated = match generator.generate_json(&agent_post_prompt(topic, agent_role)).await {
        Ok(text) => match serde_json::from_str::<GeneratedPost>(&text) {
            Ok(generated) => generated,
            Err(err) => {
                warn!("agent post was not valid JSON (topic={topic}): {err}");
                GeneratedPost {
                    title: CALIBRATION_TITLE.to_string(),
                    content: CALIBRATION_CONTENT.to_string(),
                }
            }
        },
        Err(err) => {
            warn!("agent post generation failed (topic={topic}): {err}");
            GeneratedPost {
                title: CALIBRATION_TITLE.to_string(),
                content: CALIBRATION_CONTENT.to_string(),
            }
        }
    };

    let excerpt: String = generated.content.chars().take(120).collect();
    let words = generated.content.split_whitespace().count();
    BlogPost {
        id: Uuid::new_v4().to_string(),
        title: generated.title,
        excerpt,
        content: generated.content,
        author: format!("{agent_name} (AI)"),
        author_type: AuthorType::AiAgent,
        date: Utc::now().format("%b %-d, %Y").to_string(),
        category: "AI Tech".to_string(),
        // Rough 200-words-per-minute estimate, at least one minute.
        read_time: format!("{} min", (words / 200).max(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthorType, BlogStore, CALIBRATION_TITLE, compose_agent_post};
    use nexus_test_utils::{FailingGenerator, FixedGenerator};
    use pretty_assertions::assert_eq;

    #[test]
    fn store_seeds_two_posts_newest_first() {
        let store = BlogStore::new();
        assert_eq!(store.len(), 2);
        assert_eq!(store.posts()[0].id, "init-1");
        assert_eq!(store.posts()[0].author_type, AuthorType::AiAgent);
        assert_eq!(store.posts()[1].author_type, AuthorType::User);
    }

    #[test]
    fn upsert_replaces_whole_records_in_place() {
        let mut store = BlogStore::new();
        let mut edited = store.get("init-2").expect("seed post").clone();
        edited.title = "Bootstrapping, Revised".to_string();
        edited.content = "New content".to_string();
        store.upsert(edited);

        assert_eq!(store.len(), 2);
        let post = store.get("init-2").expect("post");
        assert_eq!(post.title, "Bootstrapping, Revised");
        assert_eq!(post.content, "New content");
        // Position unchanged.
        assert_eq!(store.posts()[1].id, "init-2");
    }

    #[test]
    fn new_posts_land_at_the_top() {
        let mut store = BlogStore::new();
        let mut post = store.posts()[0].clone();
        post.id = "fresh".to_string();
        store.upsert(post);
        assert_eq!(store.len(), 3);
        assert_eq!(store.posts()[0].id, "fresh");
    }

    #[tokio::test]
    async fn composed_post_carries_the_generated_fields() {
        let generator =
            FixedGenerator::new(r#"{"title": "Scaling Content", "content": "Body text here."}"#);
        let post = compose_agent_post(&generator, "scaling", "Beta-X", "Chief Editor").await;
        assert_eq!(post.title, "Scaling Content");
        assert_eq!(post.content, "Body text here.");
        assert_eq!(post.author, "Beta-X (AI)");
        assert_eq!(post.author_type, AuthorType::AiAgent);
        assert_eq!(post.read_time, "1 min");
    }

    #[tokio::test]
    async fn provider_failure_yields_the_calibration_post() {
        let generator = FailingGenerator::new();
        let post = compose_agent_post(&generator, "scaling", "Beta-X", "Chief Editor").await;
        assert_eq!(post.title, CALIBRATION_TITLE);
        assert!(post.content.contains("recalibrating"));
    }

    #[tokio::test]
    async fn malformed_json_yields_the_calibration_post() {
        let generator = FixedGenerator::new("not json");
        let post = compose_agent_post(&generator, "scaling", "Beta-X", "Chief Editor").await;
        assert_eq!(post.title, CALIBRATION_TITLE);
    }
}

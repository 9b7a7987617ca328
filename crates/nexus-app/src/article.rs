//! Single-slot article-on-demand state.
//!
//! Requests race: a user can start a new analysis while an older one is
//! still generating. The slot hands out a generation ticket per request
//! and only the response holding the current ticket may land.

use log::{debug, warn};
use nexus_chat::{GeneratorError, TextGenerator};
use nexus_genai::article_prompt;

/// Shown when generation fails.
pub const ARTICLE_FALLBACK: &str = "System busy. Please try again.";

/// Shown when generation succeeds but returns nothing.
pub const EMPTY_ARTICLE: &str = "No content.";

/// Context line used for free-form analysis queries.
pub const CUSTOM_ANALYSIS_CONTEXT: &str =
    "A digital product or technology topic requested by user.";

/// Ticket tying an in-flight generation to the request that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleTicket(u64);

/// The article currently displayed (or being generated).
#[derive(Debug, Clone, Default)]
pub struct ArticleSlot {
    title: String,
    content: String,
    loading: bool,
    generation: u64,
}

impl ArticleSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request: clears the slot, marks it loading, and
    /// invalidates any ticket handed out earlier.
    pub fn begin(&mut self, title: impl Into<String>) -> ArticleTicket {
        self.generation += 1;
        self.title = title.into();
        self.content.clear();
        self.loading = true;
        debug!(
            "article request started (title={}, generation={})",
            self.title, self.generation
        );
        ArticleTicket(self.generation)
    }

    /// Land a finished generation. Returns `false` when the ticket has
    /// been superseded, in which case the slot is left untouched.
    pub fn complete(
        &mut self,
        ticket: ArticleTicket,
        result: Result<String, GeneratorError>,
    ) -> bool {
        if ticket.0 != self.generation {
            debug!(
                "discarding superseded article response (ticket={}, generation={})",
                ticket.0, self.generation
            );
            return false;
        }
        self.loading = false;
        self.content = match result {
            Ok(text) if text.is_empty() => EMPTY_ARTICLE.to_string(),
            Ok(text) => text,
            Err(err) => {
                warn!("article generation failed (title={}): {err}", self.title);
                ARTICLE_FALLBACK.to_string()
            }
        };
        true
    }

    /// Empty the slot. Outstanding tickets are invalidated.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.title.clear();
        self.content.clear();
        self.loading = false;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Generate a deep-dive article for a named topic.
pub async fn fetch_article(
    generator: &dyn TextGenerator,
    name: &str,
    description: &str,
) -> Result<String, GeneratorError> {
    generator.generate(&article_prompt(name, description)).await
}

#[cfg(test)]
mod tests {
    use super::{ARTICLE_FALLBACK, ArticleSlot, EMPTY_ARTICLE, fetch_article};
    use nexus_chat::{GeneratorError, TextGenerator};
    use nexus_test_utils::{FailingGenerator, FixedGenerator, RecordingGenerator};
    use pretty_assertions::assert_eq;

    #[test]
    fn successful_completion_fills_the_slot() {
        let mut slot = ArticleSlot::new();
        let ticket = slot.begin("Vercel");
        assert!(slot.is_loading());

        assert!(slot.complete(ticket, Ok("## Deep dive".to_string())));
        assert!(!slot.is_loading());
        assert_eq!(slot.title(), "Vercel");
        assert_eq!(slot.content(), "## Deep dive");
    }

    #[test]
    fn failure_lands_the_fallback_text() {
        let mut slot = ArticleSlot::new();
        let ticket = slot.begin("Vercel");
        assert!(slot.complete(ticket, Err(GeneratorError::Provider("down".to_string()))));
        assert_eq!(slot.content(), ARTICLE_FALLBACK);
    }

    #[test]
    fn empty_response_lands_the_placeholder() {
        let mut slot = ArticleSlot::new();
        let ticket = slot.begin("Vercel");
        assert!(slot.complete(ticket, Ok(String::new())));
        assert_eq!(slot.content(), EMPTY_ARTICLE);
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut slot = ArticleSlot::new();
        let stale = slot.begin("First");
        let fresh = slot.begin("Second");

        assert!(!slot.complete(stale, Ok("stale body".to_string())));
        assert!(slot.is_loading());
        assert_eq!(slot.content(), "");

        assert!(slot.complete(fresh, Ok("fresh body".to_string())));
        assert_eq!(slot.title(), "Second");
        assert_eq!(slot.content(), "fresh body");
    }

    #[test]
    fn clear_invalidates_outstanding_tickets() {
        let mut slot = ArticleSlot::new();
        let ticket = slot.begin("First");
        slot.clear();
        assert!(!slot.complete(ticket, Ok("late".to_string())));
        assert_eq!(slot.title(), "");
        assert!(!slot.is_loading());
    }

    #[tokio::test]
    async fn fetch_article_prompts_with_name_and_context() {
        let generator = RecordingGenerator::new("body");
        let text = fetch_article(&generator, "Vercel", "Deploy instantly")
            .await
            .expect("generate");
        assert_eq!(text, "body");
        let prompts = generator.prompts();
        assert!(prompts[0].contains("\"Vercel\""));
        assert!(prompts[0].contains("\"Deploy instantly\""));
    }

    #[tokio::test]
    async fn fetch_article_surfaces_provider_errors() {
        let generator: Box<dyn TextGenerator> = Box::new(FailingGenerator::new());
        assert!(fetch_article(generator.as_ref(), "X", "Y").await.is_err());

        let generator = FixedGenerator::new("ok");
        assert!(fetch_article(&generator, "X", "Y").await.is_ok());
    }
}

//! Gemini-backed implementation of the text-generation seam.
//!
//! Speaks the `generateContent` / `streamGenerateContent` REST API,
//! including server-sent-event streaming and grounding metadata.

mod client;
mod prompts;
mod wire;

pub use client::GeminiClient;
pub use prompts::{agent_post_prompt, article_prompt, ecosystem_context, master_system_prompt};

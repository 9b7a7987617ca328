//! Configuration schema for Nexus.

use crate::ConfigError;
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the generation API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Root config for the Nexus application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NexusConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub chat: ChatSettings,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl NexusConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> NexusConfigBuilder {
        NexusConfigBuilder::new()
    }

    /// Load a config from a JSON5 file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("loading config (path={})", path.display());
        let contents = fs::read_to_string(path)?;
        Ok(json5::from_str(&contents)?)
    }

    /// Load a config from a file if given, otherwise return defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Read the generation API credential from the environment.
    ///
    /// Absence is not an error at this layer; providers fail generically
    /// when the credential is missing or invalid.
    pub fn api_key() -> Option<String> {
        std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty())
    }
}

/// Builder for assembling a `NexusConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct NexusConfigBuilder {
    config: NexusConfig,
}

impl NexusConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: NexusConfig::default(),
        }
    }

    /// Replace the model configuration.
    pub fn model(mut self, model: ModelConfig) -> Self {
        self.config.model = model;
        self
    }

    /// Replace the default chat settings.
    pub fn chat(mut self, chat: ChatSettings) -> Self {
        self.config.chat = chat;
        self
    }

    /// Replace the history persistence configuration.
    pub fn history(mut self, history: HistoryConfig) -> Self {
        self.config.history = history;
        self
    }

    /// Replace the simulation configuration.
    pub fn simulation(mut self, simulation: SimulationConfig) -> Self {
        self.config.simulation = simulation;
        self
    }

    /// Replace the catalog generation configuration.
    pub fn catalog(mut self, catalog: CatalogConfig) -> Self {
        self.config.catalog = catalog;
        self
    }

    /// Finalize and return the built `NexusConfig`.
    pub fn build(self) -> NexusConfig {
        self.config
    }
}

/// Model provider configuration for the generation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_provider")]
    pub provider: String,
    #[serde(default = "default_model_name")]
    pub name: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: default_model_provider(),
            name: default_model_name(),
        }
    }
}

/// Default generation provider identifier.
fn default_model_provider() -> String {
    "gemini".to_string()
}

/// Default generation model name.
fn default_model_name() -> String {
    "gemini-2.5-flash".to_string()
}

/// Assistant settings, mutable at runtime and not persisted across runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatSettings {
    /// Enable web-search grounding for responses.
    #[serde(default = "default_enable_search")]
    pub enable_search: bool,
    /// Enable the extended-reasoning budget.
    #[serde(default)]
    pub enable_thinking: bool,
    /// Sampling creativity in `[0, 1]`, mapped to temperature.
    #[serde(default = "default_creativity")]
    pub creativity: f32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            enable_search: default_enable_search(),
            enable_thinking: false,
            creativity: default_creativity(),
        }
    }
}

/// Default toggle for web-search grounding.
fn default_enable_search() -> bool {
    true
}

/// Default creativity scalar.
fn default_creativity() -> f32 {
    0.7
}

/// Chat history persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HistoryConfig {
    /// Path of the history file; defaults to the platform data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl HistoryConfig {
    /// Resolve the history file path, falling back to the platform default.
    pub fn resolve_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.path {
            return Some(path.clone());
        }
        ProjectDirs::from("ai", "nexus", "nexus")
            .map(|dirs| dirs.data_dir().join("chat_history.json"))
    }
}

/// Tick intervals for the agent and metrics simulations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_tick_ms")]
    pub agent_tick_ms: u64,
    #[serde(default = "default_tick_ms")]
    pub metrics_tick_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            agent_tick_ms: default_tick_ms(),
            metrics_tick_ms: default_tick_ms(),
        }
    }
}

/// Default simulation tick interval in milliseconds.
fn default_tick_ms() -> u64 {
    2000
}

/// Catalog generation and pagination configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Number of procedurally generated products appended to the seed list.
    #[serde(default = "default_generated_count")]
    pub generated_count: usize,
    /// Products per marketplace page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Optional RNG seed for reproducible generation.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            generated_count: default_generated_count(),
            page_size: default_page_size(),
            seed: None,
        }
    }
}

/// Default number of generated catalog entries.
fn default_generated_count() -> usize {
    48_000
}

/// Default marketplace page size.
fn default_page_size() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::{CatalogConfig, ChatSettings, NexusConfig, SimulationConfig};
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_application_seeds() {
        let config = NexusConfig::default();
        assert_eq!(config.model.provider, "gemini");
        assert_eq!(config.model.name, "gemini-2.5-flash");
        assert_eq!(
            config.chat,
            ChatSettings {
                enable_search: true,
                enable_thinking: false,
                creativity: 0.7,
            }
        );
        assert_eq!(config.simulation.agent_tick_ms, 2000);
        assert_eq!(config.catalog.generated_count, 48_000);
        assert_eq!(config.catalog.page_size, 8);
        assert_eq!(config.catalog.seed, None);
    }

    #[test]
    fn builder_replaces_sections() {
        let config = NexusConfig::builder()
            .chat(ChatSettings {
                enable_search: false,
                enable_thinking: true,
                creativity: 0.2,
            })
            .simulation(SimulationConfig {
                agent_tick_ms: 50,
                metrics_tick_ms: 75,
            })
            .catalog(CatalogConfig {
                generated_count: 100,
                page_size: 4,
                seed: Some(7),
            })
            .build();
        assert_eq!(config.chat.enable_thinking, true);
        assert_eq!(config.simulation.metrics_tick_ms, 75);
        assert_eq!(config.catalog.seed, Some(7));
    }

    #[test]
    fn load_parses_partial_json5() {
        let mut file = NamedTempFile::new().expect("tempfile");
        write!(
            file,
            "{{ catalog: {{ generated_count: 2000, seed: 42 }}, chat: {{ creativity: 0.5 }} }}"
        )
        .expect("write");

        let config = NexusConfig::load(file.path()).expect("load");
        assert_eq!(config.catalog.generated_count, 2000);
        assert_eq!(config.catalog.seed, Some(42));
        assert_eq!(config.catalog.page_size, 8);
        assert_eq!(config.chat.creativity, 0.5);
        assert_eq!(config.chat.enable_search, true);
    }

    #[test]
    fn load_rejects_invalid_file() {
        let mut file = NamedTempFile::new().expect("tempfile");
        write!(file, "{{ not valid").expect("write");
        assert!(NexusConfig::load(file.path()).is_err());
    }
}

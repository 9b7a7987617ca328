//! Agent roster and metrics models for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of retained activity-log entries per agent.
pub const ACTIVITY_LOG_CAP: usize = 3;

/// Status of a simulated agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AgentStatus {
    /// Waiting for work.
    Idle,
    /// Reasoning about a task.
    Thinking,
    /// Producing output.
    Writing,
    /// Tuning an existing artifact.
    Optimizing,
}

impl AgentStatus {
    /// Return the status as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Idle => "Idle",
            AgentStatus::Thinking => "Thinking",
            AgentStatus::Writing => "Writing",
            AgentStatus::Optimizing => "Optimizing",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A simulated agent record. Mutated in place on each tick; never destroyed
/// during a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role label shown on the card.
    pub role: String,
    /// Current status.
    pub status: AgentStatus,
    /// Most-recent-first activity feed, at most [`ACTIVITY_LOG_CAP`] entries.
    pub activity_log: Vec<String>,
}

impl Agent {
    fn new(id: &str, name: &str, role: &str, status: AgentStatus, log: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            status,
            activity_log: log.iter().map(|entry| entry.to_string()).collect(),
        }
    }
}

/// Build the fixed agent roster.
pub fn seed_agents() -> Vec<Agent> {
    vec![
        Agent::new(
            "a1",
            "Alpha-1",
            "Content Strategist",
            AgentStatus::Thinking,
            &["Analyzing trends...", "Mapping keywords"],
        ),
        Agent::new(
            "a2",
            "Beta-X",
            "Chief Editor",
            AgentStatus::Idle,
            &["Waiting for draft..."],
        ),
        Agent::new(
            "a3",
            "Gamma-GPT",
            "Creative Writer",
            AgentStatus::Writing,
            &["Drafting section 2...", "Generating metaphors"],
        ),
        Agent::new(
            "a4",
            "Delta-SEO",
            "Growth Hacker",
            AgentStatus::Optimizing,
            &["Checking meta tags...", "Link building"],
        ),
    ]
}

/// Aggregate dashboard metrics. Decorative telemetry with no consumer
/// beyond display; the only contract is staying within the clamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metrics {
    /// Cumulative token counter.
    pub total_tokens: u64,
    /// Active process/thread count.
    pub active_processes: u32,
    /// System load percentage, clamped to `[20, 90]`.
    pub system_load: f64,
    /// Network latency in milliseconds.
    pub network_latency: u32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            total_tokens: 1_245_930,
            active_processes: 12,
            system_load: 45.0,
            network_latency: 24,
        }
    }
}

//! Decorative agent-cluster simulation: a fixed agent roster whose status
//! and activity feed are mutated on a timer, plus clamped aggregate metrics.

mod model;
mod runner;
mod tick;

pub use model::{ACTIVITY_LOG_CAP, Agent, AgentStatus, Metrics, seed_agents};
pub use runner::{Simulation, SimulationHandle, SimulationState};
pub use tick::{tick_agent, tick_agents, tick_metrics};

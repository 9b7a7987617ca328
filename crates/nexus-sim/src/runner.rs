//! Interval-driven simulation runner.
//!
//! Two background timers mutate shared state: one for the agent roster and
//! one for the aggregate metrics. The handle cancels both timers, matching
//! the dashboard view's unmount semantics; the simulation has no terminal
//! state of its own.

use crate::model::{Agent, Metrics, seed_agents};
use crate::tick::{tick_agents, tick_metrics};
use log::{debug, info};
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Shared mutable state of the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Current agent roster.
    pub agents: Vec<Agent>,
    /// Current aggregate metrics.
    pub metrics: Metrics,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            agents: seed_agents(),
            metrics: Metrics::default(),
        }
    }
}

/// Owner of the simulated cluster state.
#[derive(Clone, Default)]
pub struct Simulation {
    state: Arc<RwLock<SimulationState>>,
}

impl Simulation {
    /// Create a simulation seeded with the fixed roster and metric seeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the simulation state.
    pub fn state(&self) -> Arc<RwLock<SimulationState>> {
        self.state.clone()
    }

    /// Clone of the current state for display.
    pub fn snapshot(&self) -> SimulationState {
        self.state.read().clone()
    }

    /// Advance both simulations by one tick synchronously.
    pub fn tick_once(&self, rng: &mut impl Rng) {
        let mut state = self.state.write();
        tick_agents(&mut state.agents, rng);
        tick_metrics(&mut state.metrics, rng);
    }

    /// Spawn the agent and metrics interval tasks.
    ///
    /// A seed makes the tick sequence reproducible; otherwise the tasks use
    /// OS entropy. Must be called within a tokio runtime.
    pub fn start(
        &self,
        agent_tick: Duration,
        metrics_tick: Duration,
        seed: Option<u64>,
    ) -> SimulationHandle {
        info!(
            "starting simulation (agent_tick_ms={}, metrics_tick_ms={})",
            agent_tick.as_millis(),
            metrics_tick.as_millis()
        );
        let rng_for = |offset: u64| match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(offset)),
            None => StdRng::from_os_rng(),
        };

        let state = self.state.clone();
        let mut rng = rng_for(0);
        let agents = tokio::spawn(async move {
            let mut interval = tokio::time::interval(agent_tick);
            interval.tick().await;
            loop {
                interval.tick().await;
                let mut state = state.write();
                tick_agents(&mut state.agents, &mut rng);
                debug!("agent tick applied (agents={})", state.agents.len());
            }
        });

        let state = self.state.clone();
        let mut rng = rng_for(1);
        let metrics = tokio::spawn(async move {
            let mut interval = tokio::time::interval(metrics_tick);
            interval.tick().await;
            loop {
                interval.tick().await;
                let mut state = state.write();
                tick_metrics(&mut state.metrics, &mut rng);
            }
        });

        SimulationHandle { agents, metrics }
    }
}

/// Handle over the running simulation tasks.
pub struct SimulationHandle {
    agents: JoinHandle<()>,
    metrics: JoinHandle<()>,
}

impl SimulationHandle {
    /// Cancel both interval tasks.
    pub fn shutdown(self) {
        info!("stopping simulation timers");
        self.agents.abort();
        self.metrics.abort();
    }
}

impl Drop for SimulationHandle {
    fn drop(&mut self) {
        self.agents.abort();
        self.metrics.abort();
    }
}

//! Pure tick functions for the agent and metrics simulations.
//!
//! Transitions are probabilistic and stateless: each tick independently
//! decides whether an agent changes state. The random source is injected so
//! ticks are reproducible under test.

use crate::model::{ACTIVITY_LOG_CAP, Agent, AgentStatus, Metrics};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Activity phrases pushed onto agent feeds.
const ACTIVITIES: [&str; 6] = [
    "Processing Data",
    "Generating Tokens",
    "Reviewing SEO",
    "Deploying Content",
    "Scanning Trends",
    "Optimizing Database",
];

/// Lower clamp for the simulated system load.
pub(crate) const LOAD_MIN: f64 = 20.0;
/// Upper clamp for the simulated system load.
pub(crate) const LOAD_MAX: f64 = 90.0;

/// Advance one agent by one tick.
///
/// With probability 0.3 the agent transitions (to `Thinking` half as often
/// as `Writing`) and a uniformly chosen activity phrase is pushed onto the
/// feed; otherwise the agent is left unchanged. The feed never exceeds
/// [`ACTIVITY_LOG_CAP`] entries.
pub fn tick_agent(agent: &mut Agent, rng: &mut impl Rng) {
    let roll: f64 = rng.random();
    if roll <= 0.7 {
        return;
    }
    let activity = ACTIVITIES.choose(rng).copied().unwrap_or(ACTIVITIES[0]);
    agent.status = if roll > 0.85 {
        AgentStatus::Thinking
    } else {
        AgentStatus::Writing
    };
    agent.activity_log.insert(0, activity.to_string());
    agent.activity_log.truncate(ACTIVITY_LOG_CAP);
}

/// Advance the whole roster by one tick.
pub fn tick_agents(agents: &mut [Agent], rng: &mut impl Rng) {
    for agent in agents {
        tick_agent(agent, rng);
    }
}

/// Advance the aggregate metrics by one tick. Each field moves by an
/// independent randomized delta; the load stays within its clamp.
pub fn tick_metrics(metrics: &mut Metrics, rng: &mut impl Rng) {
    metrics.total_tokens += rng.random_range(0..50);
    metrics.active_processes = 10 + rng.random_range(0..5);
    let delta = (rng.random::<f64>() - 0.5) * 10.0;
    metrics.system_load = (metrics.system_load + delta).clamp(LOAD_MIN, LOAD_MAX);
    metrics.network_latency = 20 + rng.random_range(0..15);
}

#[cfg(test)]
mod tests {
    use super::{LOAD_MAX, LOAD_MIN, tick_agents, tick_metrics};
    use crate::model::{ACTIVITY_LOG_CAP, Metrics, seed_agents};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn activity_log_never_exceeds_cap() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut agents = seed_agents();
        for _ in 0..1000 {
            tick_agents(&mut agents, &mut rng);
        }
        for agent in &agents {
            assert!(agent.activity_log.len() <= ACTIVITY_LOG_CAP);
        }
    }

    #[test]
    fn system_load_stays_within_clamp() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut metrics = Metrics::default();
        for _ in 0..10_000 {
            tick_metrics(&mut metrics, &mut rng);
            assert!((LOAD_MIN..=LOAD_MAX).contains(&metrics.system_load));
        }
    }

    #[test]
    fn metric_deltas_stay_in_their_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut metrics = Metrics::default();
        for _ in 0..1000 {
            let tokens_before = metrics.total_tokens;
            tick_metrics(&mut metrics, &mut rng);
            assert!(metrics.total_tokens - tokens_before < 50);
            assert!((10..15).contains(&metrics.active_processes));
            assert!((20..35).contains(&metrics.network_latency));
        }
    }

    #[test]
    fn ticks_are_reproducible_for_a_seed() {
        let mut a = StdRng::seed_from_u64(6);
        let mut b = StdRng::seed_from_u64(6);
        let mut roster_a = seed_agents();
        let mut roster_b = seed_agents();
        for _ in 0..100 {
            tick_agents(&mut roster_a, &mut a);
            tick_agents(&mut roster_b, &mut b);
        }
        assert_eq!(roster_a, roster_b);
    }

    #[test]
    fn token_counter_is_monotonic() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut metrics = Metrics::default();
        let mut previous = metrics.total_tokens;
        for _ in 0..500 {
            tick_metrics(&mut metrics, &mut rng);
            assert!(metrics.total_tokens >= previous);
            previous = metrics.total_tokens;
        }
    }
}

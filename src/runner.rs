//! Simulation driver: validates configuration, runs the attempts, and
//! reduces their outcomes into a [`SimSummary`].

use log::{debug, trace};
use rand::Rng;

use crate::config::SimConfig;
use crate::entropy::attempt_rng;
use crate::error::SimError;
use crate::summary::SimSummary;
use crate::trial::simulate_attempt;

/// Run the full simulation and return the reduced summary.
///
/// The configuration is validated up front; no attempt runs on invalid
/// input. Each attempt draws from its own random stream keyed by the
/// attempt index, so the reduction is order-independent and a seeded run
/// reproduces the same summary bit for bit on every invocation.
pub fn run_simulation(config: &SimConfig) -> Result<SimSummary, SimError> {
    config.validate()?;

    let mut successful_signals = 0u32;
    let mut raw_failure_sum = 0u64;

    for attempt_index in 0..config.attempt_count {
        let mut rng = attempt_rng(config.seed, attempt_index);
        let outcome = simulate_attempt(config, &mut rng);

        if outcome.succeeded {
            successful_signals += 1;
        }
        raw_failure_sum += u64::from(outcome.raw_failures);

        trace!(
            "attempt {}: raw={} critical={} succeeded={}",
            attempt_index,
            outcome.raw_failures,
            outcome.critical_failures,
            outcome.succeeded
        );
    }

    let summary =
        SimSummary::from_counts(config.attempt_count, successful_signals, raw_failure_sum);
    debug!(
        "simulated {} attempts: accuracy={:.4} jitter_events={} avg_node_failures={:.3}",
        summary.total_attempts, summary.accuracy, summary.jitter_events, summary.avg_node_failures
    );
    Ok(summary)
}

/// Run the simulation against a caller-supplied random source.
///
/// Every attempt draws from the one stream in attempt order, which lets
/// a harness script the entire run draw by draw (see
/// [`crate::entropy::TapeRng`]). The seeded per-attempt streams of
/// [`run_simulation`] are preferred everywhere else; `config.seed` is
/// ignored here.
pub fn run_simulation_with_rng(
    config: &SimConfig,
    rng: &mut impl Rng,
) -> Result<SimSummary, SimError> {
    config.validate()?;

    let mut successful_signals = 0u32;
    let mut raw_failure_sum = 0u64;

    for _ in 0..config.attempt_count {
        let outcome = simulate_attempt(config, rng);
        if outcome.succeeded {
            successful_signals += 1;
        }
        raw_failure_sum += u64::from(outcome.raw_failures);
    }

    Ok(SimSummary::from_counts(
        config.attempt_count,
        successful_signals,
        raw_failure_sum,
    ))
}

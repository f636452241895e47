//! Single signal-transmission attempts through the damaged pathway.
//!
//! These pure functions model one motor signal crossing `node_count` relay
//! nodes. All randomness comes from the caller-supplied generator, so the
//! same code path serves seeded runs, entropy-backed runs, and scripted
//! test streams.

use rand::Rng;

use crate::config::SimConfig;

/// Outcome of one signal-transmission attempt.
///
/// Ephemeral: produced and consumed within a single attempt. The aggregation
/// fold keeps only the scalar fields; no outcome is retained after it is
/// counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Nodes, out of `node_count`, that independently failed.
    pub raw_failures: u32,
    /// Failures that were not compensated and therefore block the signal.
    pub critical_failures: u32,
    /// True iff no critical failure occurred.
    pub succeeded: bool,
}

/// Run one signal attempt through every relay node.
///
/// Each node fails independently with probability `severity`; the damage
/// model is diffuse, so node failures carry no inter-node correlation.
/// Each failure is then compensated independently with probability
/// `adaptation`, modeling rerouting as a per-fault capacity rather than
/// an all-or-nothing switch. The signal is delivered iff every failure
/// was compensated. Full adaptation neutralizes delivery loss without
/// erasing the physical failure events, which still count toward
/// `raw_failures`.
pub fn simulate_attempt(config: &SimConfig, rng: &mut impl Rng) -> TrialOutcome {
    let mut raw_failures = 0u32;
    for _ in 0..config.node_count {
        if rng.gen_bool(config.severity) {
            raw_failures += 1;
        }
    }

    let mut critical_failures = 0u32;
    for _ in 0..raw_failures {
        if !rng.gen_bool(config.adaptation) {
            critical_failures += 1;
        }
    }

    TrialOutcome {
        raw_failures,
        critical_failures,
        succeeded: critical_failures == 0,
    }
}

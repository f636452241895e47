//! Simulation configuration.

use crate::condition::Condition;
use crate::error::SimError;

/// Configuration for a simulation run.
///
/// Built once per run, never mutated afterwards. Construct with struct-update
/// syntax over [`SimConfig::default`]; the runner re-validates defensively
/// before the first trial, so a bad value can never produce a partial
/// summary.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Condition being modeled (currently only CH).
    pub condition: Condition,

    /// Intrinsic per-node failure probability, in [0.0, 1.0].
    pub severity: f64,

    /// Probability that a given node failure is neuroplastically
    /// compensated (rerouted around), in [0.0, 1.0].
    pub adaptation: f64,

    /// Number of relay nodes a signal must traverse (at least 1).
    pub node_count: u32,

    /// Number of independent signal attempts to simulate (at least 1).
    pub attempt_count: u32,

    /// Random seed for reproducibility (None = entropy-seeded).
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            condition: Condition::CerebellarHypoplasia,
            severity: 0.5,
            adaptation: 0.3,
            node_count: 10,
            attempt_count: 1000,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Representative mild case: slight wobble, cat learns workarounds.
    pub fn mild() -> Self {
        Self {
            severity: 0.3,
            adaptation: 0.6,
            ..Default::default()
        }
    }

    /// Representative moderate case: visible tremor, partial adaptation.
    pub fn moderate() -> Self {
        Self {
            severity: 0.6,
            adaptation: 0.4,
            ..Default::default()
        }
    }

    /// Representative severe case: pronounced tremor, little compensation.
    pub fn severe() -> Self {
        Self {
            severity: 0.9,
            adaptation: 0.2,
            ..Default::default()
        }
    }

    /// Check every field against its declared domain.
    ///
    /// Rejects atomically on the first violation; values are never clamped.
    /// NaN probabilities fail the range check.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(0.0..=1.0).contains(&self.severity) {
            return Err(SimError::ProbabilityOutOfRange {
                field: "severity",
                value: self.severity,
            });
        }
        if !(0.0..=1.0).contains(&self.adaptation) {
            return Err(SimError::ProbabilityOutOfRange {
                field: "adaptation",
                value: self.adaptation,
            });
        }
        if self.node_count < 1 {
            return Err(SimError::CountTooSmall {
                field: "node_count",
                value: self.node_count,
            });
        }
        if self.attempt_count < 1 {
            return Err(SimError::CountTooSmall {
                field: "attempt_count",
                value: self.attempt_count,
            });
        }
        Ok(())
    }
}

//! Aggregate statistics for a batch of signal attempts.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// The engine's sole output: reliability statistics reduced over all
/// attempts of one simulation run.
///
/// The five field names form a stable contract with every consumer
/// (CLI table, JSON report, any future dashboard); they serialize in
/// snake_case exactly as declared here.
#[derive(Debug, Clone, PartialEq)]
pub struct SimSummary {
    /// Attempt count echoed back for traceability.
    pub total_attempts: u32,
    /// Attempts where every node failure was compensated.
    pub successful_signals: u32,
    /// `successful_signals / total_attempts`, in [0, 1].
    pub accuracy: f64,
    /// Attempts blocked by at least one uncompensated failure.
    pub jitter_events: u32,
    /// Mean raw node failures per attempt, compensated or not.
    pub avg_node_failures: f64,
}

impl SimSummary {
    /// Build the summary from the accumulated counters of a run.
    ///
    /// `total_attempts` must be at least 1, asserted in debug builds;
    /// configuration validation upstream guarantees it before any
    /// attempt executes.
    pub fn from_counts(total_attempts: u32, successful_signals: u32, raw_failure_sum: u64) -> Self {
        debug_assert!(total_attempts >= 1, "total_attempts must be at least 1");
        let total = f64::from(total_attempts);
        Self {
            total_attempts,
            successful_signals,
            accuracy: f64::from(successful_signals) / total,
            jitter_events: total_attempts - successful_signals,
            avg_node_failures: raw_failure_sum as f64 / total,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Serialize for SimSummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("SimSummary", 5)?;
        state.serialize_field("total_attempts", &self.total_attempts)?;
        state.serialize_field("successful_signals", &self.successful_signals)?;
        state.serialize_field("accuracy", &self.accuracy)?;
        state.serialize_field("jitter_events", &self.jitter_events)?;
        state.serialize_field("avg_node_failures", &self.avg_node_failures)?;
        state.end()
    }
}

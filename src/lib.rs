//! NeuroCat - Monte Carlo engine for cerebellar hypoplasia signal modeling.
//!
//! Simulates motor-signal transmission through a damaged relay pathway.
//! Each attempt walks `node_count` relay nodes; every node fails
//! independently with probability `severity`, and every failure is
//! neuroplastically compensated with probability `adaptation`. A signal
//! arrives iff all of its failures were compensated. Reducing many
//! attempts yields the reliability statistics in [`SimSummary`].
//!
//! The engine is a pure function of configuration plus random source:
//! it keeps no state across calls and performs no I/O, and a fixed seed
//! reproduces the output bit for bit.

pub mod condition;
pub mod config;
pub mod entropy;
pub mod error;
pub mod report;
pub mod runner;
pub mod summary;
pub mod trial;

pub use condition::Condition;
pub use config::SimConfig;
pub use error::SimError;
pub use runner::{run_simulation, run_simulation_with_rng};
pub use summary::SimSummary;
pub use trial::{simulate_attempt, TrialOutcome};

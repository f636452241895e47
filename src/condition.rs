//! Modeled neurological conditions.

use std::fmt;
use std::str::FromStr;

use crate::error::SimError;

/// The condition whose pathway disruption is being simulated.
///
/// Closed enumeration with a single member today. Future condition types
/// (with their own disruption profiles) extend this enum without touching
/// the engine interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Cerebellar hypoplasia: diffuse motor-pathway disruption, modeled as
    /// independent per-node failure with no localized lesion.
    CerebellarHypoplasia,
}

impl Condition {
    /// Short label used in reports and on the command line.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::CerebellarHypoplasia => "CH",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ch" | "cerebellar-hypoplasia" | "cerebellar_hypoplasia" => {
                Ok(Condition::CerebellarHypoplasia)
            }
            _ => Err(SimError::UnknownCondition(s.to_string())),
        }
    }
}

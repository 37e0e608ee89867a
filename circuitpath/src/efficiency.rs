//! Energy efficiency of a path through the circuit.
//!
//! Efficiency is `1 / (1 + R)` where `R` is the summed resistance of the
//! consecutive pairs along the path. It lies in `(0, 1]` for any real path and
//! is exactly 1 only when the path has no resistance at all.

use serde::{Deserialize, Serialize};

use crate::circuit::CircuitGraph;

/// Above this efficiency a path is rated [`Tier::High`]
pub const HIGH_THRESHOLD: f64 = 0.7;
/// Above this efficiency a path is rated at least [`Tier::Medium`]
pub const MEDIUM_THRESHOLD: f64 = 0.4;

/// Qualitative efficiency bucket, for reporting only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn from_efficiency(efficiency: f64) -> Self {
        if efficiency > HIGH_THRESHOLD {
            Tier::High
        } else if efficiency > MEDIUM_THRESHOLD {
            Tier::Medium
        } else {
            Tier::Low
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::High => write!(f, "high"),
            Tier::Medium => write!(f, "medium"),
            Tier::Low => write!(f, "low"),
        }
    }
}

/// Efficiency of one path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyReport {
    pub efficiency: f64,
    pub total_weight: f64,
    /// Relative power loss, `1 - efficiency`
    pub power_loss: f64,
    pub tier: Tier,
    /// Number of consecutive pairs summed
    pub hops: usize,
}

impl EfficiencyReport {
    fn degenerate() -> Self {
        Self {
            efficiency: 0.0,
            total_weight: 0.0,
            power_loss: 1.0,
            tier: Tier::Low,
            hops: 0,
        }
    }
}

/// Compute the efficiency of `path` against the weights stored in `graph`.
///
/// Paths with fewer than two components score 0. Pairs that are not stored
/// connections count as [`crate::circuit::DEFAULT_WEIGHT`].
pub fn compute_efficiency<S: AsRef<str>>(graph: &CircuitGraph, path: &[S]) -> EfficiencyReport {
    if path.len() < 2 {
        return EfficiencyReport::degenerate();
    }

    let total_weight: f64 = path
        .windows(2)
        .map(|pair| graph.weight_or_default(pair[0].as_ref(), pair[1].as_ref()))
        .sum();

    let efficiency = 1.0 / (1.0 + total_weight);
    EfficiencyReport {
        efficiency,
        total_weight,
        power_loss: 1.0 - efficiency,
        tier: Tier::from_efficiency(efficiency),
        hops: path.len() - 1,
    }
}

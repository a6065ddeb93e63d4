//! Role aggregation of three champion vectors into one team vector
//!
//! 1. role-weighted mean per field
//! 2. peak and population variance on the raw (unweighted) inputs
//! 3. per-champion class-tag inference and composition counts
//! 4. composition nudges
//! 5. role accentuation
//! 6. easing curve `100 * (x / 100)^0.92`

use super::composition::{composition_nudge, infer_class_tag, CompositionCount};
use crate::catalog::ClassTag;
use crate::config::PersonaConfig;
use crate::roles::Role;
use crate::traits::vector::{clamp01, clamp_trait, TraitVariance, TraitVector};
use serde::{Deserialize, Serialize};

/// Number of champions per persona
pub const TEAM_SIZE: usize = 3;

/// Default easing exponent
pub const EASING_EXPONENT: f64 = 0.92;

/// Everything the aggregation step produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAggregate {
    /// Final shaped team vector
    pub traits: TraitVector,
    /// Per-field maximum across the raw inputs
    pub peak: TraitVector,
    /// Per-field population variance across the raw inputs
    pub variance: TraitVariance,
    /// Inferred class tag of each input, in input order
    pub tags: [ClassTag; TEAM_SIZE],
    pub counts: CompositionCount,
}

/// Aggregates three champion vectors under a role's weights and accent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleAggregator {
    easing_exponent: f64,
}

impl Default for RoleAggregator {
    fn default() -> Self {
        Self { easing_exponent: EASING_EXPONENT }
    }
}

impl RoleAggregator {
    pub fn new(easing_exponent: f64) -> Self {
        Self { easing_exponent }
    }

    pub fn from_config(config: &PersonaConfig) -> Self {
        Self::new(config.easing_exponent)
    }

    pub fn aggregate(&self, role: Role, vectors: &[TraitVector; TEAM_SIZE]) -> TeamAggregate {
        let weights = role.weights();
        let accent = role.accent();
        let n = TEAM_SIZE as f64;

        let weighted = TraitVector::from_fn(|field| {
            let w = weights.get(field);
            vectors.iter().map(|v| v.get(field) as f64 * w).sum::<f64>() / n
        });

        let peak = TraitVector::from_fn(|field| {
            vectors.iter().map(|v| v.get(field)).max().unwrap_or(0) as f64
        });

        let variance = TraitVariance::from_fn(|field| {
            let mean = vectors.iter().map(|v| v.get(field) as f64).sum::<f64>() / n;
            vectors.iter().map(|v| (v.get(field) as f64 - mean).powi(2)).sum::<f64>() / n
        });

        let tags = vectors.map(|v| infer_class_tag(&v));
        let counts = CompositionCount::tally(&tags);
        let nudge = composition_nudge(&counts, role);

        let traits = weighted.map(|field, value| {
            let boosted = (value + nudge[field.index()] as f64) * accent.get(field);
            self.ease(boosted)
        });

        TeamAggregate { traits, peak, variance, tags, counts }
    }

    /// Perceptual easing; spreads the 60-80 band
    fn ease(&self, value: f64) -> f64 {
        clamp_trait(100.0 * clamp01(value / 100.0).powf(self.easing_exponent)) as f64
    }
}

/// Aggregate with the default easing curve
pub fn aggregate_team(role: Role, vectors: &[TraitVector; TEAM_SIZE]) -> TeamAggregate {
    RoleAggregator::default().aggregate(role, vectors)
}

//! Derived psychological axes
//!
//! Thirteen 0..1 dispositional scores computed from the shaped team vector,
//! its peaks and spread. Trait fields are normalised through a 40..80 band;
//! inverse relationships use `1 - n(x)`.
//!
//! Order of operations:
//! 1. weighted sums of normalised inputs
//! 2. flat composition nudges
//! 3. role emphasis on agency, communion and planning
//! 4. clamp to [0, 1]

use crate::aggregate::{CompositionCount, TeamAggregate};
use crate::roles::Role;
use crate::traits::vector::{clamp01, TraitVariance, TraitVector};
use serde::{Deserialize, Serialize};

const BAND_LOW: f64 = 40.0;
const BAND_WIDTH: f64 = 40.0;
/// Mean variance that saturates the spread input
const SPREAD_SATURATION: f64 = 150.0;

/// Map a trait value through the 40..80 band into 0..1
pub fn normalize(value: u8) -> f64 {
    clamp01((value as f64 - BAND_LOW) / BAND_WIDTH)
}

/// Everything the axis formulas read
#[derive(Debug, Clone, Copy)]
pub struct AxisInput<'a> {
    pub traits: &'a TraitVector,
    pub peak: &'a TraitVector,
    pub variance: &'a TraitVariance,
    pub counts: &'a CompositionCount,
    pub role: Role,
}

impl<'a> AxisInput<'a> {
    pub fn from_aggregate(aggregate: &'a TeamAggregate, role: Role) -> Self {
        Self {
            traits: &aggregate.traits,
            peak: &aggregate.peak,
            variance: &aggregate.variance,
            counts: &aggregate.counts,
            role,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedAxes {
    pub agency: f64,
    pub communion: f64,
    pub risk_tolerance: f64,
    pub planning: f64,
    pub improvisation: f64,
    pub competitive_drive: f64,
    pub emotional_stability: f64,
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub honesty_humility: f64,
    pub locus_of_control: f64,
}

/// (agency, communion, planning) multipliers
const fn role_emphasis(role: Role) -> (f64, f64, f64) {
    match role {
        Role::Top => (1.05, 0.96, 1.00),
        Role::Jungle => (1.06, 1.00, 1.08),
        Role::Mid => (1.08, 0.98, 1.02),
        Role::Bot => (1.02, 1.00, 1.04),
        Role::Support => (0.96, 1.10, 1.06),
    }
}

impl DerivedAxes {
    pub fn derive(input: &AxisInput<'_>) -> Self {
        let t = input.traits;
        let a = normalize(t.aggression);
        let r = normalize(t.risk);
        let tm = normalize(t.teamplay);
        let c = normalize(t.control);
        let m = normalize(t.mechanics);
        let d = normalize(t.adaptability);
        let pa = normalize(input.peak.aggression);
        let pm = normalize(input.peak.mechanics);
        let s = clamp01(input.variance.mean() / SPREAD_SATURATION);

        let mut axes = Self {
            agency: 0.45 * a + 0.30 * m + 0.25 * pa,
            communion: 0.60 * tm + 0.30 * c + 0.10 * (1.0 - a),
            risk_tolerance: 0.60 * r + 0.25 * a + 0.15 * (1.0 - c),
            planning: 0.55 * c + 0.25 * tm + 0.20 * (1.0 - r),
            improvisation: 0.45 * d + 0.30 * m + 0.25 * s,
            competitive_drive: 0.40 * a + 0.30 * pm + 0.30 * m,
            emotional_stability: 0.40 * (1.0 - r) + 0.35 * c + 0.25 * (1.0 - s),
            openness: 0.50 * d + 0.25 * m + 0.25 * s,
            conscientiousness: 0.50 * c + 0.30 * (1.0 - r) + 0.20 * tm,
            extraversion: 0.45 * a + 0.35 * tm + 0.20 * r,
            agreeableness: 0.60 * tm + 0.40 * (1.0 - a),
            honesty_humility: 0.50 * tm + 0.30 * (1.0 - r) + 0.20 * (1.0 - pa),
            locus_of_control: 0.40 * c + 0.35 * m + 0.25 * d,
        }
        .map(clamp01);

        let counts = input.counts;
        if counts.double_assassin() {
            axes.risk_tolerance += 0.05;
            axes.competitive_drive += 0.05;
            axes.agency += 0.04;
        }
        if counts.marksman_and_support() {
            axes.communion += 0.04;
            axes.planning += 0.03;
        }
        if counts.tank_and_support() {
            axes.communion += 0.05;
            axes.agreeableness += 0.03;
            axes.conscientiousness += 0.03;
        }

        let (agency, communion, planning) = role_emphasis(input.role);
        axes.agency *= agency;
        axes.communion *= communion;
        axes.planning *= planning;

        axes.map(clamp01)
    }

    pub fn from_aggregate(aggregate: &TeamAggregate, role: Role) -> Self {
        Self::derive(&AxisInput::from_aggregate(aggregate, role))
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            agency: f(self.agency),
            communion: f(self.communion),
            risk_tolerance: f(self.risk_tolerance),
            planning: f(self.planning),
            improvisation: f(self.improvisation),
            competitive_drive: f(self.competitive_drive),
            emotional_stability: f(self.emotional_stability),
            openness: f(self.openness),
            conscientiousness: f(self.conscientiousness),
            extraversion: f(self.extraversion),
            agreeableness: f(self.agreeableness),
            honesty_humility: f(self.honesty_humility),
            locus_of_control: f(self.locus_of_control),
        }
    }

    /// Named axis values in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("agency", self.agency),
            ("communion", self.communion),
            ("risk_tolerance", self.risk_tolerance),
            ("planning", self.planning),
            ("improvisation", self.improvisation),
            ("competitive_drive", self.competitive_drive),
            ("emotional_stability", self.emotional_stability),
            ("openness", self.openness),
            ("conscientiousness", self.conscientiousness),
            ("extraversion", self.extraversion),
            ("agreeableness", self.agreeableness),
            ("honesty_humility", self.honesty_humility),
            ("locus_of_control", self.locus_of_control),
        ]
        .into_iter()
    }
}

/// Derive axes straight from an aggregation result
pub fn derive_axes(aggregate: &TeamAggregate, role: Role) -> DerivedAxes {
    DerivedAxes::from_aggregate(aggregate, role)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn derive(
        traits: TraitVector,
        variance: TraitVariance,
        counts: CompositionCount,
        role: Role,
    ) -> DerivedAxes {
        DerivedAxes::derive(&AxisInput {
            traits: &traits,
            peak: &traits,
            variance: &variance,
            counts: &counts,
            role,
        })
    }

    #[test]
    fn test_normalize_band() {
        assert_eq!(normalize(0), 0.0);
        assert_eq!(normalize(40), 0.0);
        assert!((normalize(60) - 0.5).abs() < EPS);
        assert_eq!(normalize(80), 1.0);
        assert_eq!(normalize(100), 1.0);
    }

    #[test]
    fn test_midpoint_team_on_jungle() {
        let axes = derive(
            TraitVector::uniform(60),
            TraitVariance::default(),
            CompositionCount::default(),
            Role::Jungle,
        );
        assert!((axes.agency - 0.53).abs() < EPS);
        assert!((axes.communion - 0.5).abs() < EPS);
        assert!((axes.planning - 0.54).abs() < EPS);
        assert!((axes.improvisation - 0.375).abs() < EPS);
        assert!((axes.emotional_stability - 0.625).abs() < EPS);
        assert!((axes.openness - 0.375).abs() < EPS);
        assert!((axes.agreeableness - 0.5).abs() < EPS);
    }

    #[test]
    fn test_spread_feeds_improvisation() {
        let calm = derive(
            TraitVector::uniform(60),
            TraitVariance::default(),
            CompositionCount::default(),
            Role::Mid,
        );
        let spread = TraitVariance {
            aggression: 300,
            risk: 300,
            teamplay: 300,
            control: 300,
            mechanics: 300,
            adaptability: 300,
        };
        let wild = derive(
            TraitVector::uniform(60),
            spread,
            CompositionCount::default(),
            Role::Mid,
        );
        assert!((wild.improvisation - calm.improvisation - 0.25).abs() < EPS);
        assert!((calm.emotional_stability - wild.emotional_stability - 0.25).abs() < EPS);
    }

    #[test]
    fn test_composition_nudges() {
        let base = derive(
            TraitVector::uniform(60),
            TraitVariance::default(),
            CompositionCount::default(),
            Role::Top,
        );
        let tank_support = CompositionCount { tank: 1, support: 1, fighter: 1, ..Default::default() };
        let nudged = derive(TraitVector::uniform(60), TraitVariance::default(), tank_support, Role::Top);
        // communion: (0.5 + 0.05) * 0.96
        assert!((nudged.communion - 0.528).abs() < EPS);
        assert!((nudged.agreeableness - base.agreeableness - 0.03).abs() < EPS);
        assert!((nudged.conscientiousness - base.conscientiousness - 0.03).abs() < EPS);
        assert_eq!(nudged.agency, base.agency);
    }

    #[test]
    fn test_double_assassin_nudge() {
        let counts = CompositionCount { assassin: 2, fighter: 1, ..Default::default() };
        let axes = derive(TraitVector::uniform(60), TraitVariance::default(), counts, Role::Top);
        assert!((axes.risk_tolerance - 0.55).abs() < EPS);
        assert!((axes.competitive_drive - 0.55).abs() < EPS);
        // agency: (0.5 + 0.04) * 1.05
        assert!((axes.agency - 0.567).abs() < EPS);
        assert!((axes.communion - 0.48).abs() < EPS);
        assert!((axes.planning - 0.5).abs() < EPS);
    }

    #[test]
    fn test_marksman_support_nudge() {
        let counts = CompositionCount { support: 1, marksman: 1, fighter: 1, ..Default::default() };
        let axes = derive(TraitVector::uniform(60), TraitVariance::default(), counts, Role::Bot);
        assert!((axes.communion - 0.54).abs() < EPS);
        // planning: (0.5 + 0.03) * 1.04
        assert!((axes.planning - 0.5512).abs() < EPS);
        assert!((axes.agency - 0.51).abs() < EPS);
        assert!((axes.agreeableness - 0.5).abs() < EPS);
        assert!((axes.risk_tolerance - 0.5).abs() < EPS);
    }

    #[test]
    fn test_role_emphasis_per_role() {
        let expected = [
            (Role::Top, 0.525, 0.48, 0.5),
            (Role::Jungle, 0.53, 0.5, 0.54),
            (Role::Mid, 0.54, 0.49, 0.51),
            (Role::Bot, 0.51, 0.5, 0.52),
            (Role::Support, 0.48, 0.55, 0.53),
        ];
        for (role, agency, communion, planning) in expected {
            let axes = derive(
                TraitVector::uniform(60),
                TraitVariance::default(),
                CompositionCount::default(),
                role,
            );
            assert!((axes.agency - agency).abs() < EPS, "{role:?} agency = {}", axes.agency);
            assert!((axes.communion - communion).abs() < EPS, "{role:?} communion = {}", axes.communion);
            assert!((axes.planning - planning).abs() < EPS, "{role:?} planning = {}", axes.planning);
            // untouched by emphasis
            assert!((axes.risk_tolerance - 0.5).abs() < EPS);
        }
    }

    #[test]
    fn test_saturated_inputs_stay_in_range() {
        let counts = CompositionCount { assassin: 2, support: 1, ..Default::default() };
        let axes = derive(TraitVector::uniform(100), TraitVariance::default(), counts, Role::Mid);
        for (name, value) in axes.iter() {
            assert!((0.0..=1.0).contains(&value), "{name} = {value}");
        }
        assert_eq!(axes.agency, 1.0);
        assert_eq!(axes.competitive_drive, 1.0);
    }

    #[test]
    fn test_iter_names() {
        let names: Vec<_> = DerivedAxes::default().iter().map(|(n, _)| n).collect();
        assert_eq!(names.len(), 13);
        assert_eq!(names[0], "agency");
        assert_eq!(names[12], "locus_of_control");
    }
}

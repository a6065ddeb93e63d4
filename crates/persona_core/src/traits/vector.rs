//! Six-field behavioral trait vector
//!
//! Every field is an integer on the 0-100 scale. Vectors are `Copy` values;
//! every transform returns a new vector and re-clamps each field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound for every trait field
pub const TRAIT_MAX: u8 = 100;

/// One of the six behavioral dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitField {
    Aggression,
    Risk,
    Teamplay,
    Control,
    Mechanics,
    Adaptability,
}

impl TraitField {
    /// All fields in display order
    pub const ALL: [TraitField; 6] = [
        TraitField::Aggression,
        TraitField::Risk,
        TraitField::Teamplay,
        TraitField::Control,
        TraitField::Mechanics,
        TraitField::Adaptability,
    ];

    /// Position of the field inside [`TraitField::ALL`]
    pub const fn index(self) -> usize {
        match self {
            TraitField::Aggression => 0,
            TraitField::Risk => 1,
            TraitField::Teamplay => 2,
            TraitField::Control => 3,
            TraitField::Mechanics => 4,
            TraitField::Adaptability => 5,
        }
    }

    /// Human-readable label for presentation layers
    pub const fn label(self) -> &'static str {
        match self {
            TraitField::Aggression => "Aggression",
            TraitField::Risk => "Risk",
            TraitField::Teamplay => "Teamplay",
            TraitField::Control => "Control",
            TraitField::Mechanics => "Mechanics",
            TraitField::Adaptability => "Adaptability",
        }
    }
}

impl fmt::Display for TraitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Behavioral profile of a champion or of a three-champion team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitVector {
    pub aggression: u8,
    pub risk: u8,
    pub teamplay: u8,
    pub control: u8,
    pub mechanics: u8,
    pub adaptability: u8,
}

impl TraitVector {
    /// Build a vector from literal values.
    ///
    /// Values above 100 are clamped.
    pub const fn new(
        aggression: u8,
        risk: u8,
        teamplay: u8,
        control: u8,
        mechanics: u8,
        adaptability: u8,
    ) -> Self {
        Self {
            aggression: cap(aggression),
            risk: cap(risk),
            teamplay: cap(teamplay),
            control: cap(control),
            mechanics: cap(mechanics),
            adaptability: cap(adaptability),
        }
    }

    /// Vector with the same value on every field
    pub const fn uniform(value: u8) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    /// Build a vector from a per-field real-valued function.
    ///
    /// Each result is rounded half-up and clamped to 0-100.
    pub fn from_fn(mut f: impl FnMut(TraitField) -> f64) -> Self {
        Self {
            aggression: clamp_trait(f(TraitField::Aggression)),
            risk: clamp_trait(f(TraitField::Risk)),
            teamplay: clamp_trait(f(TraitField::Teamplay)),
            control: clamp_trait(f(TraitField::Control)),
            mechanics: clamp_trait(f(TraitField::Mechanics)),
            adaptability: clamp_trait(f(TraitField::Adaptability)),
        }
    }

    pub const fn get(&self, field: TraitField) -> u8 {
        match field {
            TraitField::Aggression => self.aggression,
            TraitField::Risk => self.risk,
            TraitField::Teamplay => self.teamplay,
            TraitField::Control => self.control,
            TraitField::Mechanics => self.mechanics,
            TraitField::Adaptability => self.adaptability,
        }
    }

    /// Apply a real-valued transform to every field, then round and clamp
    pub fn map(&self, mut f: impl FnMut(TraitField, f64) -> f64) -> Self {
        Self::from_fn(|field| f(field, self.get(field) as f64))
    }

    /// Multiply every field by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        self.map(|_, value| value * factor)
    }

    /// Largest value among `fields`
    pub fn max_of(&self, fields: &[TraitField]) -> u8 {
        fields.iter().map(|f| self.get(*f)).max().unwrap_or(0)
    }

    /// Iterate `(field, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (TraitField, u8)> + '_ {
        TraitField::ALL.iter().map(move |f| (*f, self.get(*f)))
    }
}

impl fmt::Display for TraitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "agg {} / risk {} / team {} / ctrl {} / mech {} / adapt {}",
            self.aggression,
            self.risk,
            self.teamplay,
            self.control,
            self.mechanics,
            self.adaptability
        )
    }
}

/// Per-field population variance of three raw vectors.
///
/// Unbounded above 100, so it is not a [`TraitVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraitVariance {
    pub aggression: u32,
    pub risk: u32,
    pub teamplay: u32,
    pub control: u32,
    pub mechanics: u32,
    pub adaptability: u32,
}

impl TraitVariance {
    pub const fn get(&self, field: TraitField) -> u32 {
        match field {
            TraitField::Aggression => self.aggression,
            TraitField::Risk => self.risk,
            TraitField::Teamplay => self.teamplay,
            TraitField::Control => self.control,
            TraitField::Mechanics => self.mechanics,
            TraitField::Adaptability => self.adaptability,
        }
    }

    /// Mean variance across all six fields
    pub fn mean(&self) -> f64 {
        TraitField::ALL.iter().map(|f| self.get(*f) as f64).sum::<f64>() / 6.0
    }

    pub(crate) fn from_fn(mut f: impl FnMut(TraitField) -> f64) -> Self {
        let mut cell = |field| round_half_up(f(field)).max(0.0) as u32;
        Self {
            aggression: cell(TraitField::Aggression),
            risk: cell(TraitField::Risk),
            teamplay: cell(TraitField::Teamplay),
            control: cell(TraitField::Control),
            mechanics: cell(TraitField::Mechanics),
            adaptability: cell(TraitField::Adaptability),
        }
    }
}

const fn cap(value: u8) -> u8 {
    if value > TRAIT_MAX {
        TRAIT_MAX
    } else {
        value
    }
}

/// Round to the nearest integer with halves going toward positive infinity
/// (`-1.5 -> -1`, `2.5 -> 3`).
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Round half-up and clamp into the 0-100 trait range. NaN maps to 0.
pub fn clamp_trait(x: f64) -> u8 {
    if x.is_nan() {
        return 0;
    }
    round_half_up(x).clamp(0.0, TRAIT_MAX as f64) as u8
}

/// Clamp into 0..=1. NaN maps to 0.
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_matches_negative_halves() {
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(4.5), 5.0);
        assert_eq!(round_half_up(-0.4), 0.0);
    }

    #[test]
    fn test_clamp_trait_bounds() {
        assert_eq!(clamp_trait(-12.0), 0);
        assert_eq!(clamp_trait(100.49), 100);
        assert_eq!(clamp_trait(250.0), 100);
        assert_eq!(clamp_trait(f64::NAN), 0);
        assert_eq!(clamp_trait(56.4), 56);
    }

    #[test]
    fn test_new_caps_at_hundred() {
        let v = TraitVector::new(120, 0, 50, 101, 100, 7);
        assert_eq!(v.aggression, 100);
        assert_eq!(v.control, 100);
        assert_eq!(v.adaptability, 7);
    }

    #[test]
    fn test_scaled_rounds_each_field() {
        let v = TraitVector::new(86, 80, 55, 52, 92, 74).scaled(0.94);
        // 86 * 0.94 = 80.84, 55 * 0.94 = 51.7, 74 * 0.94 = 69.56
        assert_eq!(v.aggression, 81);
        assert_eq!(v.teamplay, 52);
        assert_eq!(v.adaptability, 70);
    }

    #[test]
    fn test_iter_follows_display_order() {
        let v = TraitVector::new(1, 2, 3, 4, 5, 6);
        let values: Vec<u8> = v.iter().map(|(_, value)| value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(v.max_of(&[TraitField::Risk, TraitField::Control]), 4);
    }

    #[test]
    fn test_variance_mean() {
        let var = TraitVariance {
            aggression: 6,
            risk: 0,
            teamplay: 12,
            control: 0,
            mechanics: 0,
            adaptability: 0,
        };
        assert_eq!(var.mean(), 3.0);
    }
}

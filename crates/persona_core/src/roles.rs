//! Role tables: aggregation weights, accentuation curve, on-role class tags
//!
//! Pure lookups keyed by [`Role`]; there is no "current role" state.
//! - weights: per-field multipliers for the team weighted mean
//! - accent: per-field multipliers applied after composition nudges
//! - affinity: class tags that count as on-role

use crate::catalog::ClassTag;
use crate::error::UnknownRole;
use crate::resolve::canonicalize;
use crate::traits::vector::TraitField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lane the player selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Bot,
    Support,
}

impl Default for Role {
    /// Fallback role for missing or unrecognised role names
    fn default() -> Self {
        Role::Jungle
    }
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Bot, Role::Support];

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Top => "Top",
            Role::Jungle => "Jungle",
            Role::Mid => "Mid",
            Role::Bot => "Bot",
            Role::Support => "Support",
        }
    }

    /// Parse a role name, accepting common lane shorthand
    /// ("jg", "middle", "adc", "sup", ...).
    pub fn parse(name: &str) -> Option<Self> {
        match canonicalize(name).as_str() {
            "top" | "toplane" => Some(Role::Top),
            "jungle" | "jungler" | "jg" | "jng" => Some(Role::Jungle),
            "mid" | "middle" | "midlane" => Some(Role::Mid),
            "bot" | "bottom" | "adc" | "botlane" => Some(Role::Bot),
            "support" | "sup" | "supp" => Some(Role::Support),
            _ => None,
        }
    }

    /// Per-field weights for the team weighted mean
    pub const fn weights(self) -> FieldMultipliers {
        match self {
            Role::Top => FieldMultipliers::new(1.0, 0.7, 0.7, 1.0, 0.9, 0.8),
            Role::Jungle => FieldMultipliers::new(1.0, 0.9, 0.9, 1.1, 1.0, 1.0),
            Role::Mid => FieldMultipliers::new(1.0, 0.9, 0.8, 1.0, 1.0, 0.9),
            Role::Bot => FieldMultipliers::new(0.9, 0.7, 0.9, 1.0, 0.9, 0.8),
            Role::Support => FieldMultipliers::new(0.7, 0.6, 1.2, 1.2, 0.8, 0.9),
        }
    }

    /// Per-field accentuation multipliers (0.96-1.12 band)
    pub const fn accent(self) -> FieldMultipliers {
        match self {
            Role::Top => FieldMultipliers::new(1.04, 1.0, 1.01, 1.06, 1.04, 1.05),
            Role::Jungle => FieldMultipliers::new(1.06, 1.03, 1.05, 1.08, 1.04, 1.05),
            Role::Mid => FieldMultipliers::new(1.05, 1.03, 1.0, 1.06, 1.06, 1.03),
            Role::Bot => FieldMultipliers::new(1.03, 0.99, 1.04, 1.06, 1.05, 1.02),
            Role::Support => FieldMultipliers::new(0.98, 0.98, 1.1, 1.1, 1.02, 1.04),
        }
    }

    /// Class tags typically played in this role
    pub const fn affinity(self) -> &'static [ClassTag] {
        match self {
            Role::Top => &[ClassTag::Fighter, ClassTag::Tank, ClassTag::Mage],
            Role::Jungle => &[ClassTag::Assassin, ClassTag::Fighter, ClassTag::Tank, ClassTag::Mage],
            Role::Mid => &[ClassTag::Assassin, ClassTag::Mage, ClassTag::Fighter],
            Role::Bot => &[ClassTag::Marksman, ClassTag::Mage],
            Role::Support => &[ClassTag::Support, ClassTag::Tank, ClassTag::Mage],
        }
    }

    /// Whether any of `tags` is on-role
    pub fn is_aligned(self, tags: &[ClassTag]) -> bool {
        self.affinity().iter().any(|t| tags.contains(t))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Six per-field multipliers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldMultipliers {
    pub aggression: f64,
    pub risk: f64,
    pub teamplay: f64,
    pub control: f64,
    pub mechanics: f64,
    pub adaptability: f64,
}

impl FieldMultipliers {
    pub const fn new(
        aggression: f64,
        risk: f64,
        teamplay: f64,
        control: f64,
        mechanics: f64,
        adaptability: f64,
    ) -> Self {
        Self { aggression, risk, teamplay, control, mechanics, adaptability }
    }

    pub const fn get(&self, field: TraitField) -> f64 {
        match field {
            TraitField::Aggression => self.aggression,
            TraitField::Risk => self.risk,
            TraitField::Teamplay => self.teamplay,
            TraitField::Control => self.control,
            TraitField::Mechanics => self.mechanics,
            TraitField::Adaptability => self.adaptability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_shorthand() {
        assert_eq!(Role::parse("Jungle"), Some(Role::Jungle));
        assert_eq!(Role::parse("ADC"), Some(Role::Bot));
        assert_eq!(Role::parse(" sup "), Some(Role::Support));
        assert_eq!(Role::parse("middle"), Some(Role::Mid));
        assert_eq!(Role::parse("goalkeeper"), None);
        assert_eq!("top".parse::<Role>(), Ok(Role::Top));
        assert_eq!("".parse::<Role>(), Err(UnknownRole(String::new())));
    }

    #[test]
    fn test_default_role_is_jungle() {
        assert_eq!(Role::default(), Role::Jungle);
    }

    #[test]
    fn test_support_weights_favor_teamplay_and_control() {
        let w = Role::Support.weights();
        assert_eq!(w.get(TraitField::Teamplay), 1.2);
        assert_eq!(w.get(TraitField::Control), 1.2);
        assert_eq!(w.get(TraitField::Risk), 0.6);
    }

    #[test]
    fn test_accent_stays_in_band() {
        for role in Role::ALL {
            let accent = role.accent();
            for field in TraitField::ALL {
                let m = accent.get(field);
                assert!((0.96..=1.12).contains(&m), "{role} {field} accent {m} out of band");
            }
        }
    }

    #[test]
    fn test_alignment() {
        assert!(Role::Bot.is_aligned(&[ClassTag::Marksman]));
        assert!(!Role::Bot.is_aligned(&[ClassTag::Assassin, ClassTag::Fighter]));
        assert!(!Role::Top.is_aligned(&[]));
        assert!(Role::Support.is_aligned(&[ClassTag::Fighter, ClassTag::Tank]));
    }
}

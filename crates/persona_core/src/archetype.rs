//! Archetype selection
//!
//! An ordered rule table over the team vector and its peaks. The first rule
//! that matches wins; "Calculated Playmaker" catches everything else. Peaks
//! let a single standout champion qualify even when the other two pull the
//! team average down.

use crate::aggregate::CompositionCount;
use crate::traits::vector::{TraitField, TraitVector};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    #[serde(rename = "Daredevil Virtuoso")]
    DaredevilVirtuoso,
    #[serde(rename = "Frontline Captain")]
    FrontlineCaptain,
    #[serde(rename = "Playmaking Shepherd")]
    PlaymakingShepherd,
    #[serde(rename = "Shadow Outplayer")]
    ShadowOutplayer,
    #[serde(rename = "Siege Conductor")]
    SiegeConductor,
    #[serde(rename = "Split-Lane Duelist")]
    SplitLaneDuelist,
    #[serde(rename = "Enchanter Architect")]
    EnchanterArchitect,
    #[serde(rename = "Duel Pit Foreman")]
    DuelPitForeman,
    #[serde(rename = "Objective Broker")]
    ObjectiveBroker,
    #[serde(rename = "Artillery Quartermaster")]
    ArtilleryQuartermaster,
    #[serde(rename = "Windward Caretaker")]
    WindwardCaretaker,
    #[serde(rename = "Adaptive Tactician")]
    AdaptiveTactician,
    #[serde(rename = "Calculated Playmaker")]
    CalculatedPlaymaker,
}

impl Archetype {
    pub const fn label(self) -> &'static str {
        match self {
            Archetype::DaredevilVirtuoso => "Daredevil Virtuoso",
            Archetype::FrontlineCaptain => "Frontline Captain",
            Archetype::PlaymakingShepherd => "Playmaking Shepherd",
            Archetype::ShadowOutplayer => "Shadow Outplayer",
            Archetype::SiegeConductor => "Siege Conductor",
            Archetype::SplitLaneDuelist => "Split-Lane Duelist",
            Archetype::EnchanterArchitect => "Enchanter Architect",
            Archetype::DuelPitForeman => "Duel Pit Foreman",
            Archetype::ObjectiveBroker => "Objective Broker",
            Archetype::ArtilleryQuartermaster => "Artillery Quartermaster",
            Archetype::WindwardCaretaker => "Windward Caretaker",
            Archetype::AdaptiveTactician => "Adaptive Tactician",
            Archetype::CalculatedPlaymaker => "Calculated Playmaker",
        }
    }

    pub const fn quip(self) -> &'static str {
        match self {
            Archetype::DaredevilVirtuoso => {
                "You live on the highlight reel—bring wards and a witness."
            }
            Archetype::FrontlineCaptain => "You start the fight and still remember the exit.",
            Archetype::PlaymakingShepherd => "You find the angle and escort it to safety.",
            Archetype::ShadowOutplayer => "If they’re missing, you’re grinning.",
            Archetype::SiegeConductor => "You win by paperwork: waves, wards, and warnings.",
            Archetype::SplitLaneDuelist => "Side lanes are your diary; you write in towers.",
            Archetype::EnchanterArchitect => "Your carries pay rent; you provide infrastructure.",
            Archetype::DuelPitForeman => "You tax every river fight and collect with interest.",
            Archetype::ObjectiveBroker => {
                "You don’t chase kills—you broker them into plates and souls."
            }
            Archetype::ArtilleryQuartermaster => {
                "Zones, slows, and health bars filed under ‘compliance’."
            }
            Archetype::WindwardCaretaker => "You write the invites and bounce the door.",
            Archetype::AdaptiveTactician => {
                "You change the win-con faster than they change wards."
            }
            Archetype::CalculatedPlaymaker => "You don’t chase fights—you schedule them.",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Values the archetype rules look at
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeInput<'a> {
    pub traits: &'a TraitVector,
    pub peak: &'a TraitVector,
    pub counts: &'a CompositionCount,
}

impl ArchetypeInput<'_> {
    /// Peak of `field`, or the team value when no peak was recorded
    fn peak_or_team(&self, field: TraitField) -> u8 {
        match self.peak.get(field) {
            0 => self.traits.get(field),
            p => p,
        }
    }
}

struct ArchetypeRule {
    archetype: Archetype,
    matches: fn(&ArchetypeInput<'_>) -> bool,
}

static ARCHETYPE_RULES: &[ArchetypeRule] = &[
    ArchetypeRule {
        archetype: Archetype::DaredevilVirtuoso,
        matches: |i| {
            let t = i.traits;
            (i.peak_or_team(TraitField::Mechanics) >= 86
                && i.peak_or_team(TraitField::Aggression) >= 74)
                || (t.mechanics >= 82 && t.aggression >= 72 && t.risk >= 66)
        },
    },
    ArchetypeRule {
        archetype: Archetype::FrontlineCaptain,
        matches: |i| {
            let t = i.traits;
            (t.control >= 72 && t.teamplay >= 78)
                || (i.peak_or_team(TraitField::Control) >= 78 && t.teamplay >= 74)
        },
    },
    ArchetypeRule {
        archetype: Archetype::PlaymakingShepherd,
        matches: |i| i.traits.aggression >= 72 && i.traits.control >= 66,
    },
    ArchetypeRule {
        archetype: Archetype::ShadowOutplayer,
        matches: |i| i.traits.aggression >= 74 && i.traits.risk >= 68,
    },
    ArchetypeRule {
        archetype: Archetype::SiegeConductor,
        matches: |i| i.traits.control >= 72 && i.traits.mechanics >= 70 && i.traits.risk <= 60,
    },
    ArchetypeRule {
        archetype: Archetype::SplitLaneDuelist,
        matches: |i| {
            let t = i.traits;
            t.adaptability >= 70 && t.aggression >= 70 && t.control >= 60
        },
    },
    ArchetypeRule {
        archetype: Archetype::EnchanterArchitect,
        matches: |i| i.traits.teamplay >= 80 && i.traits.control >= 72 && i.traits.risk <= 58,
    },
    ArchetypeRule {
        archetype: Archetype::DuelPitForeman,
        matches: |i| {
            let t = i.traits;
            t.aggression >= 72 && t.mechanics >= 68 && t.teamplay <= 65 && t.control <= 66
        },
    },
    ArchetypeRule {
        archetype: Archetype::ObjectiveBroker,
        matches: |i| i.traits.control >= 68 && i.traits.aggression >= 66 && i.traits.risk <= 66,
    },
    ArchetypeRule {
        archetype: Archetype::ArtilleryQuartermaster,
        matches: |i| i.traits.control >= 74 && i.traits.risk <= 58 && i.traits.mechanics >= 68,
    },
    ArchetypeRule {
        archetype: Archetype::WindwardCaretaker,
        matches: |i| i.traits.teamplay >= 78 && i.traits.risk <= 60,
    },
    ArchetypeRule {
        archetype: Archetype::AdaptiveTactician,
        matches: |i| {
            let t = i.traits;
            let spikes = [
                TraitField::Aggression,
                TraitField::Control,
                TraitField::Teamplay,
                TraitField::Mechanics,
            ];
            t.adaptability >= 72 && t.max_of(&spikes) <= 74
        },
    },
];

/// Pick the archetype for a team vector, its peaks and composition
pub fn select_archetype(
    traits: &TraitVector,
    peak: &TraitVector,
    counts: &CompositionCount,
) -> Archetype {
    let input = ArchetypeInput { traits, peak, counts };
    ARCHETYPE_RULES
        .iter()
        .find(|rule| (rule.matches)(&input))
        .map(|rule| rule.archetype)
        .unwrap_or(Archetype::CalculatedPlaymaker)
}

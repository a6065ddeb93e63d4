//! Team composition: class-tag inference from a vector, tag counts, and
//! the additive nudges certain compositions earn.

use crate::catalog::ClassTag;
use crate::roles::Role;
use crate::traits::vector::{TraitField, TraitVector};
use serde::{Deserialize, Serialize};

struct TagRule {
    tag: ClassTag,
    matches: fn(&TraitVector) -> bool,
}

/// Ordered tag cascade; first match wins, Fighter otherwise.
static TAG_RULES: &[TagRule] = &[
    TagRule { tag: ClassTag::Assassin, matches: |v| v.mechanics >= 84 && v.aggression >= 75 },
    TagRule { tag: ClassTag::Support, matches: |v| v.teamplay >= 85 && v.control >= 80 },
    TagRule {
        tag: ClassTag::Tank,
        matches: |v| v.control >= 80 && v.teamplay >= 75 && v.aggression < 65,
    },
    TagRule { tag: ClassTag::Marksman, matches: |v| v.mechanics >= 74 && v.aggression >= 66 },
    TagRule { tag: ClassTag::Mage, matches: |v| v.control >= 72 && v.mechanics >= 72 },
];

/// Classify a single vector into exactly one class tag
pub fn infer_class_tag(v: &TraitVector) -> ClassTag {
    TAG_RULES.iter().find(|rule| (rule.matches)(v)).map(|rule| rule.tag).unwrap_or(ClassTag::Fighter)
}

/// How many team members were inferred into each class tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompositionCount {
    pub assassin: u8,
    pub fighter: u8,
    pub mage: u8,
    pub marksman: u8,
    pub support: u8,
    pub tank: u8,
}

impl CompositionCount {
    pub fn tally(tags: &[ClassTag]) -> Self {
        let mut counts = Self::default();
        for tag in tags {
            *counts.slot(*tag) += 1;
        }
        counts
    }

    pub const fn get(&self, tag: ClassTag) -> u8 {
        match tag {
            ClassTag::Assassin => self.assassin,
            ClassTag::Fighter => self.fighter,
            ClassTag::Mage => self.mage,
            ClassTag::Marksman => self.marksman,
            ClassTag::Support => self.support,
            ClassTag::Tank => self.tank,
        }
    }

    pub fn total(&self) -> u32 {
        ClassTag::ALL.iter().map(|t| self.get(*t) as u32).sum()
    }

    fn slot(&mut self, tag: ClassTag) -> &mut u8 {
        match tag {
            ClassTag::Assassin => &mut self.assassin,
            ClassTag::Fighter => &mut self.fighter,
            ClassTag::Mage => &mut self.mage,
            ClassTag::Marksman => &mut self.marksman,
            ClassTag::Support => &mut self.support,
            ClassTag::Tank => &mut self.tank,
        }
    }

    pub fn double_assassin(&self) -> bool {
        self.assassin >= 2
    }

    pub fn tank_and_support(&self) -> bool {
        self.tank >= 1 && self.support >= 1
    }

    pub fn marksman_and_support(&self) -> bool {
        self.marksman >= 1 && self.support >= 1
    }
}

/// Additive per-field adjustment, indexed by [`TraitField::index`]
pub type FieldNudge = [i32; 6];

struct NudgeRule {
    applies: fn(&CompositionCount, Role) -> bool,
    delta: &'static [(TraitField, i32)],
}

static NUDGE_RULES: &[NudgeRule] = &[
    NudgeRule {
        applies: |c, _| c.double_assassin(),
        delta: &[(TraitField::Aggression, 5), (TraitField::Risk, 5), (TraitField::Mechanics, 4)],
    },
    NudgeRule {
        applies: |c, _| c.tank_and_support(),
        delta: &[(TraitField::Teamplay, 6), (TraitField::Control, 5)],
    },
    NudgeRule {
        applies: |c, _| c.marksman_and_support(),
        delta: &[(TraitField::Control, 4), (TraitField::Risk, -3)],
    },
    NudgeRule {
        applies: |c, role| c.fighter >= 2 && role == Role::Top,
        delta: &[(TraitField::Adaptability, 4), (TraitField::Control, 3)],
    },
    NudgeRule {
        applies: |c, role| c.mage >= 2 && role == Role::Mid,
        delta: &[(TraitField::Control, 4), (TraitField::Mechanics, 3)],
    },
];

/// Sum of every composition nudge that applies. Each rule fires at most once.
pub fn composition_nudge(counts: &CompositionCount, role: Role) -> FieldNudge {
    let mut nudge = [0; 6];
    for rule in NUDGE_RULES.iter().filter(|r| (r.applies)(counts, role)) {
        for (field, amount) in rule.delta {
            nudge[field.index()] += amount;
        }
    }
    nudge
}

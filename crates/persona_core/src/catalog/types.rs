//! Champion records supplied by the external catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// Basic-attack range used when the catalog does not report one (melee)
pub const DEFAULT_ATTACK_RANGE: f64 = 175.0;

/// Attack range at or above which a champion counts as ranged
pub const RANGED_THRESHOLD: f64 = 425.0;

/// Champion class tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassTag {
    Assassin,
    Fighter,
    Mage,
    Marksman,
    Support,
    Tank,
}

impl ClassTag {
    pub const ALL: [ClassTag; 6] = [
        ClassTag::Assassin,
        ClassTag::Fighter,
        ClassTag::Mage,
        ClassTag::Marksman,
        ClassTag::Support,
        ClassTag::Tank,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ClassTag::Assassin => "Assassin",
            ClassTag::Fighter => "Fighter",
            ClassTag::Mage => "Mage",
            ClassTag::Marksman => "Marksman",
            ClassTag::Support => "Support",
            ClassTag::Tank => "Tank",
        }
    }

    /// Parse a catalog tag string (case-insensitive)
    pub fn parse(tag: &str) -> Option<Self> {
        ClassTag::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(tag.trim()))
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combat ratings on the catalog's 0-10 scale.
///
/// Missing fields deserialize as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatInfo {
    pub attack: f64,
    pub defense: f64,
    pub magic: f64,
    pub difficulty: f64,
}

impl CombatInfo {
    pub const fn new(attack: f64, defense: f64, magic: f64, difficulty: f64) -> Self {
        Self { attack, defense, magic, difficulty }
    }
}

/// One champion as known to the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionRecord {
    /// Stable identifier (e.g. `"LeeSin"`)
    pub id: String,
    /// Display name (e.g. `"Lee Sin"`)
    pub name: String,
    #[serde(default)]
    pub tags: Vec<ClassTag>,
    /// Catalog tags outside the six known classes; blend as Fighter
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_tags: Vec<String>,
    #[serde(default)]
    pub info: CombatInfo,
    #[serde(default = "default_attack_range")]
    pub attack_range: f64,
}

fn default_attack_range() -> f64 {
    DEFAULT_ATTACK_RANGE
}

impl ChampionRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tags: Vec::new(),
            other_tags: Vec::new(),
            info: CombatInfo::default(),
            attack_range: DEFAULT_ATTACK_RANGE,
        }
    }

    pub fn with_tags(mut self, tags: &[ClassTag]) -> Self {
        self.tags = tags.to_vec();
        self
    }

    pub fn with_other_tags(mut self, tags: &[&str]) -> Self {
        self.other_tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_info(mut self, info: CombatInfo) -> Self {
        self.info = info;
        self
    }

    pub fn with_attack_range(mut self, range: f64) -> Self {
        self.attack_range = range;
        self
    }

    pub fn has_tag(&self, tag: ClassTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_ranged(&self) -> bool {
        self.attack_range >= RANGED_THRESHOLD
    }
}

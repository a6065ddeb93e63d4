//! Strength and blind-spot lines
//!
//! Every rule whose threshold holds appends its line, in table order. The
//! role rule runs after the general strength rules; both lists are then
//! deduplicated (first occurrence wins) and truncated.

use super::axes::DerivedAxes;
use crate::roles::Role;
use serde::{Deserialize, Serialize};

/// Default cap on lines per list
pub const MAX_LINES: usize = 4;

struct NarrativeRule {
    matches: fn(&DerivedAxes) -> bool,
    line: &'static str,
}

struct RoleRule {
    role: Role,
    matches: fn(&DerivedAxes) -> bool,
    line: &'static str,
}

static STRENGTH_RULES: &[NarrativeRule] = &[
    NarrativeRule {
        matches: |x| x.agency >= 0.72 && x.communion >= 0.68,
        line: "Carries the tempo without leaving the team behind.",
    },
    NarrativeRule {
        matches: |x| x.planning >= 0.70,
        line: "Plays the map, not just the fight.",
    },
    NarrativeRule {
        matches: |x| x.communion >= 0.70,
        line: "Enables allies: peel, saves, follow-up.",
    },
    NarrativeRule {
        matches: |x| x.competitive_drive >= 0.75,
        line: "High execution ceiling; timings matter.",
    },
    NarrativeRule {
        matches: |x| x.agency >= 0.72,
        line: "Proactive. Creates windows rather than waiting.",
    },
    NarrativeRule {
        matches: |x| x.openness >= 0.68 || x.improvisation >= 0.70,
        line: "Can pivot win-cons mid-game.",
    },
    NarrativeRule {
        matches: |x| x.emotional_stability >= 0.70,
        line: "Stays level after a thrown fight.",
    },
    NarrativeRule {
        matches: |x| x.conscientiousness >= 0.72 && x.honesty_humility >= 0.60,
        line: "Does the unglamorous jobs: wards, waves, timers.",
    },
];

static BLIND_SPOT_RULES: &[NarrativeRule] = &[
    NarrativeRule {
        matches: |x| x.risk_tolerance >= 0.70 && x.planning <= 0.50,
        line: "Flips fights when vision is thin.",
    },
    NarrativeRule {
        matches: |x| x.agency >= 0.75 && x.communion <= 0.40,
        line: "Forces plays your team can't cash.",
    },
    NarrativeRule {
        matches: |x| x.planning >= 0.75 && x.agency <= 0.40,
        line: "Over-curates; misses free tempo.",
    },
    NarrativeRule {
        matches: |x| x.communion >= 0.80 && x.agency <= 0.40,
        line: "Too selfless; passes agency windows.",
    },
    NarrativeRule {
        matches: |x| x.emotional_stability <= 0.35,
        line: "Tilts after early deaths and resets the plan too late.",
    },
    NarrativeRule {
        matches: |x| x.improvisation <= 0.30 && x.openness <= 0.30,
        line: "Struggles once the first plan breaks.",
    },
    NarrativeRule {
        matches: |x| x.locus_of_control <= 0.30,
        line: "Waits for teammates to set things up.",
    },
];

static ROLE_RULES: &[RoleRule] = &[
    RoleRule {
        role: Role::Top,
        matches: |x| x.agency >= 0.60 && x.emotional_stability >= 0.50,
        line: "Holds an island and still draws pressure.",
    },
    RoleRule {
        role: Role::Jungle,
        matches: |x| x.planning >= 0.60,
        line: "Plays the map, not just the fight.",
    },
    RoleRule {
        role: Role::Mid,
        matches: |x| x.agency >= 0.60,
        line: "Turns lane priority into roams.",
    },
    RoleRule {
        role: Role::Bot,
        matches: |x| x.competitive_drive >= 0.60,
        line: "Converts safe farm into late-game fights.",
    },
    RoleRule {
        role: Role::Support,
        matches: |x| x.communion >= 0.60,
        line: "Sets up vision so others can play forward.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Narrative {
    pub strengths: Vec<String>,
    pub blind_spots: Vec<String>,
}

impl Narrative {
    /// Markdown bullet lists; strengths in bold, blind spots plain
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("### Strengths\n");
        for line in &self.strengths {
            out.push_str(&format!("- **{line}**\n"));
        }
        out.push_str("\n### Blind spots\n");
        for line in &self.blind_spots {
            out.push_str(&format!("- {line}\n"));
        }
        out
    }
}

pub fn generate_narrative(axes: &DerivedAxes, role: Role, max_lines: usize) -> Narrative {
    let mut strengths: Vec<&'static str> = STRENGTH_RULES
        .iter()
        .filter(|rule| (rule.matches)(axes))
        .map(|rule| rule.line)
        .collect();
    strengths.extend(
        ROLE_RULES
            .iter()
            .filter(|rule| rule.role == role && (rule.matches)(axes))
            .map(|rule| rule.line),
    );

    let blind_spots: Vec<&'static str> = BLIND_SPOT_RULES
        .iter()
        .filter(|rule| (rule.matches)(axes))
        .map(|rule| rule.line)
        .collect();

    Narrative {
        strengths: finish(strengths, max_lines),
        blind_spots: finish(blind_spots, max_lines),
    }
}

fn finish(lines: Vec<&'static str>, max_lines: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(max_lines);
    for line in lines {
        if out.len() == max_lines {
            break;
        }
        if !out.iter().any(|seen| seen == line) {
            out.push(line.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axes(value: f64) -> DerivedAxes {
        DerivedAxes {
            agency: value,
            communion: value,
            risk_tolerance: value,
            planning: value,
            improvisation: value,
            competitive_drive: value,
            emotional_stability: value,
            openness: value,
            conscientiousness: value,
            extraversion: value,
            agreeableness: value,
            honesty_humility: value,
            locus_of_control: value,
        }
    }

    #[test]
    fn test_all_zero_axes() {
        let narrative = generate_narrative(&axes(0.0), Role::Jungle, MAX_LINES);
        assert!(narrative.strengths.is_empty());
        assert_eq!(
            narrative.blind_spots,
            vec![
                "Tilts after early deaths and resets the plan too late.",
                "Struggles once the first plan breaks.",
                "Waits for teammates to set things up.",
            ]
        );
    }

    #[test]
    fn test_role_line_is_deduplicated() {
        let x = DerivedAxes { planning: 0.8, ..axes(0.5) };
        let narrative = generate_narrative(&x, Role::Jungle, MAX_LINES);
        assert_eq!(narrative.strengths, vec!["Plays the map, not just the fight."]);
    }

    #[test]
    fn test_role_line_appended_after_general_rules() {
        let x = DerivedAxes { planning: 0.8, communion: 0.65, ..axes(0.5) };
        let narrative = generate_narrative(&x, Role::Support, MAX_LINES);
        assert_eq!(
            narrative.strengths,
            vec!["Plays the map, not just the fight.", "Sets up vision so others can play forward."]
        );
    }

    #[test]
    fn test_role_rule_only_for_its_role() {
        let x = DerivedAxes { communion: 0.65, ..axes(0.5) };
        assert!(generate_narrative(&x, Role::Bot, MAX_LINES).strengths.is_empty());
    }

    #[test]
    fn test_truncation_keeps_rule_order() {
        let narrative = generate_narrative(&axes(0.8), Role::Support, MAX_LINES);
        assert_eq!(
            narrative.strengths,
            vec![
                "Carries the tempo without leaving the team behind.",
                "Plays the map, not just the fight.",
                "Enables allies: peel, saves, follow-up.",
                "High execution ceiling; timings matter.",
            ]
        );
        assert!(narrative.blind_spots.is_empty());
    }

    #[test]
    fn test_custom_cap() {
        let narrative = generate_narrative(&axes(0.8), Role::Top, 2);
        assert_eq!(narrative.strengths.len(), 2);
    }

    #[test]
    fn test_markdown_emphasis() {
        let narrative = Narrative {
            strengths: vec!["Reads the map.".to_string()],
            blind_spots: vec!["Overstays.".to_string()],
        };
        let md = narrative.to_markdown();
        assert!(md.contains("- **Reads the map.**"));
        assert!(md.contains("- Overstays.\n"));
        assert!(!md.contains("**Overstays."));
    }
}

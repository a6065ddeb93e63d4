//! Computed trait vector for champions without an override
//!
//! Starts from the blended class baseline and shifts it by the catalog's
//! combat ratings:
//! - difficulty drives mechanics
//! - attack drives aggression
//! - magic and defense drive control
//! - defense drives teamplay
//! - ranged champions play safer and more control-oriented

use super::baseline::blended_baseline;
use super::types::{ChampionRecord, ClassTag};
use crate::traits::vector::{round_half_up, TraitField, TraitVector};

const MAX_DIFFICULTY: f64 = 10.0;
const RATING_MIDPOINT: f64 = 5.0;

/// Derive a trait vector from class tags and combat metadata
pub fn computed_vector(champ: &ChampionRecord) -> TraitVector {
    let mut blend = champ.tags.clone();
    blend.extend(champ.other_tags.iter().map(|_| ClassTag::Fighter));
    let base = blended_baseline(&blend);
    let info = champ.info;
    let ranged = champ.is_ranged();

    let difficulty = info.difficulty.min(MAX_DIFFICULTY);
    let magic_defense = (info.magic + info.defense) / 2.0;

    let mut delta = [0.0_f64; 6];
    delta[TraitField::Mechanics.index()] += round_half_up((difficulty - RATING_MIDPOINT) * 2.0);
    delta[TraitField::Aggression.index()] += round_half_up((info.attack - RATING_MIDPOINT) * 1.5);
    delta[TraitField::Control.index()] += round_half_up((magic_defense - RATING_MIDPOINT) * 1.2);
    delta[TraitField::Teamplay.index()] += round_half_up((info.defense - RATING_MIDPOINT) * 1.5);
    delta[TraitField::Risk.index()] += if ranged { -4.0 } else { 2.0 };
    if champ.has_tag(ClassTag::Assassin) {
        delta[TraitField::Adaptability.index()] += 2.0;
    }
    if ranged {
        delta[TraitField::Control.index()] += 3.0;
        delta[TraitField::Aggression.index()] -= 1.0;
    }

    base.map(|field, value| value + delta[field.index()])
}

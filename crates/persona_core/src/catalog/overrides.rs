//! Hand-tuned trait vectors for individual champions
//!
//! An entry here always replaces the computed fallback. Absence is normal.

use crate::traits::vector::TraitVector;
use std::collections::HashMap;
use std::sync::OnceLock;

const fn tv(agg: u8, risk: u8, team: u8, ctrl: u8, mech: u8, adapt: u8) -> TraitVector {
    TraitVector::new(agg, risk, team, ctrl, mech, adapt)
}

static OVERRIDES: &[(&str, TraitVector)] = &[
    // Assassins / skirmishers
    ("LeeSin", tv(86, 80, 55, 52, 92, 74)),
    ("Khazix", tv(88, 80, 42, 46, 85, 70)),
    ("Evelynn", tv(82, 80, 40, 50, 84, 66)),
    ("Nidalee", tv(80, 78, 44, 52, 86, 68)),
    ("Rengar", tv(90, 82, 38, 44, 80, 64)),
    ("Talon", tv(86, 80, 42, 48, 82, 68)),
    ("Zed", tv(88, 78, 42, 50, 88, 66)),
    ("Katarina", tv(84, 82, 40, 44, 90, 66)),
    ("Leblanc", tv(82, 78, 44, 52, 86, 70)),
    ("Sylas", tv(80, 72, 52, 56, 82, 76)),
    ("Yasuo", tv(84, 78, 52, 54, 88, 70)),
    ("Yone", tv(86, 80, 50, 54, 86, 72)),
    ("Kayn", tv(84, 78, 50, 56, 84, 78)),
    ("Diana", tv(80, 74, 52, 56, 80, 68)),
    // Tanks / engage
    ("Sejuani", tv(58, 44, 86, 86, 56, 60)),
    ("JarvanIV", tv(74, 60, 74, 72, 70, 64)),
    ("Vi", tv(76, 64, 70, 66, 72, 64)),
    ("Nunu", tv(60, 46, 80, 80, 56, 62)),
    ("Zac", tv(64, 46, 84, 82, 62, 64)),
    ("Amumu", tv(62, 46, 84, 82, 60, 60)),
    ("Rell", tv(66, 48, 86, 84, 60, 60)),
    ("Nautilus", tv(66, 50, 86, 84, 62, 60)),
    ("Leona", tv(68, 52, 86, 84, 62, 58)),
    ("Malphite", tv(66, 48, 80, 78, 58, 60)),
    ("Ornn", tv(58, 42, 82, 84, 56, 60)),
    ("Shen", tv(56, 42, 86, 84, 56, 64)),
    // Enchanters / control supports
    ("Lulu", tv(40, 38, 90, 82, 58, 64)),
    ("Janna", tv(38, 36, 88, 86, 56, 64)),
    ("Soraka", tv(36, 36, 90, 82, 54, 60)),
    ("Nami", tv(46, 40, 86, 80, 60, 62)),
    ("Karma", tv(48, 42, 82, 80, 62, 64)),
    ("Morgana", tv(54, 46, 78, 80, 62, 62)),
    ("Rakan", tv(62, 50, 86, 80, 70, 66)),
    ("Thresh", tv(60, 48, 88, 88, 70, 66)),
    ("Bard", tv(56, 48, 80, 84, 72, 70)),
    // Control mages / artillery
    ("Orianna", tv(60, 50, 70, 82, 78, 64)),
    ("Azir", tv(66, 54, 68, 80, 84, 66)),
    ("Viktor", tv(58, 50, 68, 80, 76, 64)),
    ("Xerath", tv(56, 48, 66, 84, 74, 60)),
    ("Ziggs", tv(54, 48, 66, 84, 74, 62)),
    ("Velkoz", tv(56, 48, 66, 84, 76, 62)),
    ("Anivia", tv(54, 46, 70, 86, 74, 60)),
    // Marksmen
    ("Jinx", tv(66, 56, 64, 74, 74, 60)),
    ("Ashe", tv(58, 50, 70, 78, 70, 60)),
    ("Caitlyn", tv(62, 52, 64, 78, 74, 60)),
    ("Ezreal", tv(66, 56, 62, 70, 80, 62)),
    ("Kaisa", tv(72, 60, 62, 70, 82, 66)),
    ("Xayah", tv(68, 58, 64, 70, 78, 64)),
    ("Draven", tv(80, 70, 56, 62, 82, 60)),
    ("Samira", tv(82, 72, 56, 62, 84, 62)),
    ("Aphelios", tv(66, 56, 62, 74, 86, 60)),
    ("Varus", tv(62, 52, 64, 76, 74, 60)),
    ("KogMaw", tv(56, 50, 66, 78, 72, 58)),
    ("Tristana", tv(72, 62, 58, 66, 76, 62)),
    // Duelists / bruisers / split pushers
    ("Fiora", tv(84, 72, 50, 62, 86, 70)),
    ("Camille", tv(82, 72, 52, 64, 84, 72)),
    ("Jax", tv(78, 66, 50, 60, 80, 70)),
    ("Darius", tv(76, 62, 52, 60, 72, 66)),
    ("Renekton", tv(74, 64, 52, 60, 72, 66)),
    ("Aatrox", tv(76, 64, 54, 62, 78, 68)),
    ("Garen", tv(60, 50, 58, 62, 62, 60)),
    ("Kennen", tv(66, 56, 64, 76, 78, 64)),
    ("Jayce", tv(70, 58, 58, 74, 80, 66)),
    ("Gnar", tv(62, 52, 60, 74, 72, 66)),
];

fn override_index() -> &'static HashMap<&'static str, TraitVector> {
    static INDEX: OnceLock<HashMap<&'static str, TraitVector>> = OnceLock::new();
    INDEX.get_or_init(|| OVERRIDES.iter().copied().collect())
}

/// Hand-tuned vector for `id`, if one exists
pub fn override_for(id: &str) -> Option<TraitVector> {
    override_index().get(id).copied()
}

/// Number of champions with a hand-tuned vector
pub fn override_count() -> usize {
    OVERRIDES.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_table_has_no_duplicates() {
        assert_eq!(override_index().len(), override_count());
        assert_eq!(override_count(), 64);
    }

    #[test]
    fn test_lookup_is_case_sensitive_identifier() {
        assert_eq!(override_for("LeeSin"), Some(TraitVector::new(86, 80, 55, 52, 92, 74)));
        assert_eq!(override_for("leesin"), None);
        assert_eq!(override_for("Akali"), None);
    }
}

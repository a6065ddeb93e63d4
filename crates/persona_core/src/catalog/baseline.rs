//! Per-class default trait vectors

use super::types::ClassTag;
use crate::traits::vector::{round_half_up, TraitField, TraitVector};

/// Default vector for a class tag
pub const fn class_baseline(tag: ClassTag) -> TraitVector {
    match tag {
        ClassTag::Assassin => TraitVector::new(84, 80, 44, 46, 84, 66),
        ClassTag::Fighter => TraitVector::new(72, 60, 56, 56, 66, 71),
        ClassTag::Mage => TraitVector::new(64, 55, 56, 70, 72, 66),
        ClassTag::Marksman => TraitVector::new(68, 57, 60, 66, 74, 61),
        ClassTag::Support => TraitVector::new(46, 40, 86, 82, 56, 66),
        ClassTag::Tank => TraitVector::new(56, 40, 82, 82, 56, 61),
    }
}

/// Field-wise rounded mean of the baselines for `tags`.
///
/// Untagged champions get the Fighter baseline.
pub fn blended_baseline(tags: &[ClassTag]) -> TraitVector {
    if tags.is_empty() {
        return class_baseline(ClassTag::Fighter);
    }

    let n = tags.len() as f64;
    TraitVector::from_fn(|field: TraitField| {
        let sum: f64 = tags.iter().map(|t| class_baseline(*t).get(field) as f64).sum();
        round_half_up(sum / n)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tag_is_identity() {
        assert_eq!(blended_baseline(&[ClassTag::Mage]), class_baseline(ClassTag::Mage));
    }

    #[test]
    fn test_untagged_is_fighter() {
        assert_eq!(blended_baseline(&[]), class_baseline(ClassTag::Fighter));
    }

    #[test]
    fn test_two_tags_round_half_up() {
        // Fighter + Tank: agg (72+56)/2 = 64, adapt (71+61)/2 = 66,
        // risk (60+40)/2 = 50, ctrl (56+82)/2 = 69
        let v = blended_baseline(&[ClassTag::Fighter, ClassTag::Tank]);
        assert_eq!(v, TraitVector::new(64, 50, 69, 69, 61, 66));

        // Assassin + Mage: risk (80+55)/2 = 67.5 -> 68
        let v = blended_baseline(&[ClassTag::Assassin, ClassTag::Mage]);
        assert_eq!(v.risk, 68);
    }
}

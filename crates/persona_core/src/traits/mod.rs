//! Trait vectors and per-champion trait resolution

pub mod champion;
pub mod vector;

pub use champion::{champion_traits, ChampionTraits, TraitSource};
pub use vector::{clamp01, clamp_trait, round_half_up, TraitField, TraitVariance, TraitVector};

//! Champion catalog and trait tables
//!
//! - `types`: champion records as supplied by the external catalog
//! - `snapshot`: immutable, insertion-ordered catalog view
//! - `baseline`: per-class default vectors
//! - `overrides`: hand-tuned per-champion vectors
//! - `fallback`: computed vector for champions without an override

pub mod baseline;
pub mod fallback;
pub mod overrides;
pub mod snapshot;
pub mod types;

pub use baseline::{blended_baseline, class_baseline};
pub use fallback::computed_vector;
pub use overrides::{override_count, override_for};
pub use snapshot::CatalogSnapshot;
pub use types::{ChampionRecord, ClassTag, CombatInfo, DEFAULT_ATTACK_RANGE, RANGED_THRESHOLD};

//! Per-champion trait resolution
//!
//! Name → identifier → override or computed vector → off-role softening.

use crate::catalog::{computed_vector, override_for, CatalogSnapshot, ChampionRecord, ClassTag};
use crate::config::PersonaConfig;
use crate::resolve::{resolve_champion, Resolution};
use crate::roles::Role;
use crate::traits::vector::TraitVector;
use serde::{Deserialize, Serialize};

/// Where a champion's vector came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitSource {
    /// Hand-tuned entry in the override table
    Override,
    /// Derived from class tags and combat ratings
    Computed,
    /// Name did not resolve; neutral midpoint vector
    Neutral,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChampionTraits {
    pub vector: TraitVector,
    pub resolution: Option<Resolution>,
    pub source: TraitSource,
    /// Catalog class tags of the resolved champion
    pub tags: Vec<ClassTag>,
    pub on_role: bool,
}

/// Resolve `input` and produce its trait vector for `role`.
///
/// An unresolved name yields the neutral vector untouched by role scaling.
/// An alias target missing from the catalog has no tags and so is off-role;
/// without an override it is computed as an untagged champion with zero
/// ratings.
pub fn champion_traits(
    input: &str,
    role: Role,
    catalog: &CatalogSnapshot,
    config: &PersonaConfig,
) -> ChampionTraits {
    let Some(resolution) = resolve_champion(input, catalog) else {
        return ChampionTraits {
            vector: TraitVector::uniform(config.neutral_trait_value),
            resolution: None,
            source: TraitSource::Neutral,
            tags: Vec::new(),
            on_role: false,
        };
    };

    let record = catalog.get(&resolution.id);
    let (base, source) = match override_for(&resolution.id) {
        Some(vector) => (vector, TraitSource::Override),
        None => {
            let computed = match record {
                Some(champ) => computed_vector(champ),
                None => computed_vector(&ChampionRecord::new(&resolution.id, &resolution.id)),
            };
            (computed, TraitSource::Computed)
        }
    };

    let tags = record.map(|c| c.tags.clone()).unwrap_or_default();
    let on_role = role.is_aligned(&tags);
    let scale = if on_role { 1.0 } else { config.off_role_scale };

    ChampionTraits {
        vector: base.scaled(scale),
        resolution: Some(resolution),
        source,
        tags,
        on_role,
    }
}

//! Immutable catalog snapshot
//!
//! Built once after the external fetch completes and handed by reference to
//! every scoring call. A new catalog replaces the old one wholesale; nothing
//! mutates a snapshot after construction.
//!
//! Iteration order is insertion order. The fuzzy resolver scans in this
//! order, so it decides ties between equally good candidates.

use super::types::{ChampionRecord, ClassTag, CombatInfo, DEFAULT_ATTACK_RANGE};
use crate::error::CatalogError;
use crate::resolve::canon::canonicalize;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    version: String,
    champions: Vec<ChampionRecord>,
    index: HashMap<String, usize>,
    canon_ids: Vec<String>,
    canon_names: Vec<String>,
}

impl CatalogSnapshot {
    /// Build a snapshot from records in the order given.
    pub fn new(
        version: impl Into<String>,
        champions: Vec<ChampionRecord>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(champions.len());
        for (i, champ) in champions.iter().enumerate() {
            if index.insert(champ.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(champ.id.clone()));
            }
        }

        let canon_ids = champions.iter().map(|c| canonicalize(&c.id)).collect();
        let canon_names = champions.iter().map(|c| canonicalize(&c.name)).collect();

        Ok(Self { version: version.into(), champions, index, canon_ids, canon_names })
    }

    /// Snapshot with no champions; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a Data Dragon style `champion.json` document.
    ///
    /// Reads `version` and, for every entry under `data`, the `id`, `name`,
    /// `tags`, `info` ratings and `stats.attackrange`. Entries keep the
    /// document's key order. Unknown class tags are kept aside in
    /// `other_tags`.
    pub fn from_ddragon_json(json: &str) -> Result<Self, CatalogError> {
        let doc: DdragonDocument = serde_json::from_str(json)?;

        let mut champions = Vec::with_capacity(doc.data.len());
        for (key, value) in doc.data {
            let entry: DdragonChampion = serde_json::from_value(value)
                .map_err(|source| CatalogError::MalformedEntry { key: key.clone(), source })?;
            champions.push(entry.into_record());
        }

        debug!(version = %doc.version, champions = champions.len(), "parsed champion catalog");
        Self::new(doc.version, champions)
    }

    /// Catalog (patch) version the snapshot was built from
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ChampionRecord> {
        self.index.get(id).map(|&i| &self.champions[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Class tags of `id`, empty when the champion is unknown
    pub fn tags_of(&self, id: &str) -> &[ClassTag] {
        self.get(id).map(|c| c.tags.as_slice()).unwrap_or(&[])
    }

    pub fn champions(&self) -> impl Iterator<Item = &ChampionRecord> {
        self.champions.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.champions.iter().map(|c| c.id.as_str())
    }

    /// `(identifier, canonical identifier)` pairs in catalog order
    pub fn id_keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.champions.iter().zip(&self.canon_ids).map(|(c, k)| (c.id.as_str(), k.as_str()))
    }

    /// `(identifier, canonical display name)` pairs in catalog order
    pub fn name_keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.champions.iter().zip(&self.canon_names).map(|(c, k)| (c.id.as_str(), k.as_str()))
    }
}

#[derive(Deserialize)]
struct DdragonDocument {
    #[serde(default)]
    version: String,
    data: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct DdragonChampion {
    id: String,
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    info: CombatInfo,
    #[serde(default)]
    stats: DdragonStats,
}

#[derive(Deserialize, Default)]
struct DdragonStats {
    #[serde(default)]
    attackrange: Option<f64>,
}

impl DdragonChampion {
    fn into_record(self) -> ChampionRecord {
        let mut tags = Vec::with_capacity(self.tags.len());
        let mut other_tags = Vec::new();
        for raw in self.tags {
            match ClassTag::parse(&raw) {
                Some(tag) => tags.push(tag),
                None => {
                    debug!(champion = %self.id, tag = %raw, "unknown class tag blends as Fighter");
                    other_tags.push(raw);
                }
            }
        }

        // A zero range is as good as missing.
        let attack_range = match self.stats.attackrange {
            Some(range) if range > 0.0 => range,
            _ => DEFAULT_ATTACK_RANGE,
        };

        ChampionRecord {
            id: self.id,
            name: self.name,
            tags,
            other_tags,
            info: self.info,
            attack_range,
        }
    }
}

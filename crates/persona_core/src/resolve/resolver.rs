//! Free-text champion name resolution
//!
//! Strict order, first success wins:
//! 1. alias table (short-circuits, even for identifiers missing from the catalog)
//! 2. exact canonical identifier, then exact canonical display name
//! 3. prefix over identifiers then display names
//! 4. substring over the same candidate list

use super::alias::alias_target;
use super::canon::canonicalize;
use crate::catalog::CatalogSnapshot;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which resolution step produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    Alias,
    ExactId,
    ExactName,
    Prefix,
    Substring,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub id: String,
    pub method: MatchMethod,
}

impl Resolution {
    fn new(id: &str, method: MatchMethod) -> Self {
        Self { id: id.to_string(), method }
    }
}

/// Resolve `input` to a champion identifier, or `None` when nothing matches.
pub fn resolve_champion(input: &str, catalog: &CatalogSnapshot) -> Option<Resolution> {
    let key = canonicalize(input);
    if key.is_empty() {
        return None;
    }

    if let Some(id) = alias_target(&key) {
        return Some(Resolution::new(id, MatchMethod::Alias));
    }

    if let Some((id, _)) = catalog.id_keys().find(|(_, k)| *k == key) {
        return Some(Resolution::new(id, MatchMethod::ExactId));
    }
    if let Some((id, _)) = catalog.name_keys().find(|(_, k)| *k == key) {
        return Some(Resolution::new(id, MatchMethod::ExactName));
    }

    let mut candidates = catalog.id_keys().chain(catalog.name_keys());
    if let Some((id, _)) = candidates.find(|(_, k)| k.starts_with(key.as_str())) {
        debug!(input, id, "prefix match");
        return Some(Resolution::new(id, MatchMethod::Prefix));
    }

    let mut candidates = catalog.id_keys().chain(catalog.name_keys());
    if let Some((id, _)) = candidates.find(|(_, k)| k.contains(key.as_str())) {
        debug!(input, id, "substring match");
        return Some(Resolution::new(id, MatchMethod::Substring));
    }

    debug!(input, "no champion match");
    None
}

/// Identifier-only convenience wrapper around [`resolve_champion`]
pub fn resolve_champion_id(input: &str, catalog: &CatalogSnapshot) -> Option<String> {
    resolve_champion(input, catalog).map(|r| r.id)
}

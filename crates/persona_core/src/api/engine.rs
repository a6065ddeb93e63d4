//! Persona engine holding the shared catalog snapshot
//!
//! The snapshot is immutable and shared through an `Arc`; a new catalog
//! replaces it wholesale. The engine keeps a record of the last computed
//! persona for callers that want to persist it.

use super::persona::{compute_persona, PersonaRequest, PersonaResult};
use crate::archetype::Archetype;
use crate::catalog::CatalogSnapshot;
use crate::config::PersonaConfig;
use crate::error::{PersonaError, Result};
use crate::roles::Role;
use crate::traits::TraitVector;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Last computed persona, serialisable for a cache layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaCacheRecord {
    pub role: Role,
    pub mains: Vec<String>,
    pub catalog_version: String,
    pub traits: TraitVector,
    pub archetype: Archetype,
    pub quip: String,
    pub saved_at: DateTime<Utc>,
}

impl PersonaCacheRecord {
    pub fn from_result(
        request: &PersonaRequest,
        result: &PersonaResult,
        catalog_version: &str,
    ) -> Self {
        Self {
            role: result.role,
            mains: request.mains.to_vec(),
            catalog_version: catalog_version.to_string(),
            traits: result.traits,
            archetype: result.archetype,
            quip: result.quip.clone(),
            saved_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| PersonaError::Serialization(e.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PersonaEngine {
    catalog: Arc<CatalogSnapshot>,
    config: PersonaConfig,
    last: Option<PersonaCacheRecord>,
}

impl PersonaEngine {
    pub fn new(catalog: Arc<CatalogSnapshot>, config: PersonaConfig) -> Self {
        Self { catalog, config, last: None }
    }

    /// Engine with default config and a freshly wrapped catalog
    pub fn with_catalog(catalog: CatalogSnapshot) -> Self {
        Self::new(Arc::new(catalog), PersonaConfig::default())
    }

    pub fn catalog(&self) -> &Arc<CatalogSnapshot> {
        &self.catalog
    }

    pub fn config(&self) -> &PersonaConfig {
        &self.config
    }

    /// Swap in a new catalog snapshot. The previous one stays alive for
    /// any holder of its `Arc`.
    pub fn replace_catalog(&mut self, catalog: Arc<CatalogSnapshot>) {
        debug!(
            from = self.catalog.version(),
            to = catalog.version(),
            champions = catalog.len(),
            "replacing catalog snapshot"
        );
        self.catalog = catalog;
    }

    pub fn compute(&mut self, request: &PersonaRequest) -> PersonaResult {
        let result = compute_persona(request, &self.catalog, &self.config);
        self.last = Some(PersonaCacheRecord::from_result(request, &result, self.catalog.version()));
        result
    }

    pub fn last_record(&self) -> Option<&PersonaCacheRecord> {
        self.last.as_ref()
    }
}

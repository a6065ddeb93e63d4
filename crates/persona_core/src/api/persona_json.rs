//! JSON entry point for host integrations
//!
//! Request: `{"role": "Jungle", "mains": ["j4", "lee", "kha"]}`
//! Response: the serialized [`PersonaResult`].

use super::persona::{compute_persona, PersonaRequest, PersonaResult};
use crate::catalog::CatalogSnapshot;
use crate::config::PersonaConfig;
use crate::error::{PersonaError, Result};
use tracing::{debug, error};

pub fn compute_persona_json(
    request_json: &str,
    catalog: &CatalogSnapshot,
    config: &PersonaConfig,
) -> Result<String> {
    debug!("Processing persona request");

    let request: PersonaRequest = serde_json::from_str(request_json).map_err(|e| {
        error!("Failed to parse PersonaRequest: {}", e);
        PersonaError::from(e)
    })?;

    let result: PersonaResult = compute_persona(&request, catalog, config);
    serde_json::to_string(&result).map_err(|e| PersonaError::Serialization(e.to_string()))
}

//! Persona computation: role + three champion names → persona result

use crate::aggregate::{CompositionCount, RoleAggregator, TEAM_SIZE};
use crate::archetype::{select_archetype, Archetype};
use crate::catalog::{CatalogSnapshot, ClassTag};
use crate::config::PersonaConfig;
use crate::narrative::{generate_narrative, DerivedAxes, Narrative};
use crate::resolve::MatchMethod;
use crate::roles::Role;
use crate::traits::{champion_traits, TraitSource, TraitVariance, TraitVector};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Persona request as received from a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaRequest {
    /// Free-text role name; empty or unknown falls back to the default role
    #[serde(default)]
    pub role: String,
    pub mains: [String; TEAM_SIZE],
}

impl PersonaRequest {
    pub fn new(role: impl Into<String>, mains: [&str; TEAM_SIZE]) -> Self {
        Self { role: role.into(), mains: mains.map(str::to_string) }
    }
}

/// Diagnostic record for one input name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionTrace {
    pub input: String,
    pub id: Option<String>,
    pub tags: Vec<ClassTag>,
    pub method: Option<MatchMethod>,
    pub source: TraitSource,
    pub on_role: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaResult {
    pub role: Role,
    pub traits: TraitVector,
    pub archetype: Archetype,
    pub quip: String,
    pub strengths: Vec<String>,
    pub blind_spots: Vec<String>,
    pub peak: TraitVector,
    pub variance: TraitVariance,
    /// Inferred class tag per input, in input order
    pub inferred_tags: [ClassTag; TEAM_SIZE],
    pub counts: CompositionCount,
    pub axes: DerivedAxes,
    pub trace: Vec<ResolutionTrace>,
}

impl PersonaResult {
    pub fn narrative(&self) -> Narrative {
        Narrative { strengths: self.strengths.clone(), blind_spots: self.blind_spots.clone() }
    }
}

/// Resolve a request role, falling back to the configured default
pub fn resolve_role(raw: &str, config: &PersonaConfig) -> Role {
    match raw.parse::<Role>() {
        Ok(role) => role,
        Err(e) => {
            warn!(role = raw, fallback = %config.default_role, "{e}; using default role");
            config.default_role
        }
    }
}

/// Run the full scoring pipeline. Never fails; unknown inputs degrade to
/// neutral values.
pub fn compute_persona(
    request: &PersonaRequest,
    catalog: &CatalogSnapshot,
    config: &PersonaConfig,
) -> PersonaResult {
    let role = resolve_role(&request.role, config);

    let champions = request.mains.each_ref().map(|name| champion_traits(name, role, catalog, config));
    let vectors = champions.each_ref().map(|c| c.vector);

    let aggregate = RoleAggregator::from_config(config).aggregate(role, &vectors);
    let archetype = select_archetype(&aggregate.traits, &aggregate.peak, &aggregate.counts);
    let axes = DerivedAxes::from_aggregate(&aggregate, role);
    let narrative = generate_narrative(&axes, role, config.max_narrative_lines);

    let trace = request
        .mains
        .iter()
        .zip(champions)
        .map(|(input, champ)| ResolutionTrace {
            input: input.clone(),
            id: champ.resolution.as_ref().map(|r| r.id.clone()),
            method: champ.resolution.as_ref().map(|r| r.method),
            tags: champ.tags,
            source: champ.source,
            on_role: champ.on_role,
        })
        .collect();

    info!(
        role = %role,
        archetype = %archetype,
        catalog_version = catalog.version(),
        "computed persona"
    );

    PersonaResult {
        role,
        traits: aggregate.traits,
        archetype,
        quip: archetype.quip().to_string(),
        strengths: narrative.strengths,
        blind_spots: narrative.blind_spots,
        peak: aggregate.peak,
        variance: aggregate.variance,
        inferred_tags: aggregate.tags,
        counts: aggregate.counts,
        axes,
        trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ChampionRecord;

    fn catalog() -> CatalogSnapshot {
        CatalogSnapshot::new(
            "14.1.1",
            vec![
                ChampionRecord::new("LeeSin", "Lee Sin")
                    .with_tags(&[ClassTag::Fighter, ClassTag::Assassin]),
                ChampionRecord::new("Khazix", "Kha'Zix").with_tags(&[ClassTag::Assassin]),
                ChampionRecord::new("JarvanIV", "Jarvan IV")
                    .with_tags(&[ClassTag::Tank, ClassTag::Fighter]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_unknown_role_uses_default() {
        let config = PersonaConfig { default_role: Role::Mid, ..PersonaConfig::default() };
        assert_eq!(resolve_role("sidelane", &config), Role::Mid);
        assert_eq!(resolve_role("", &PersonaConfig::default()), Role::Jungle);
        assert_eq!(resolve_role("adc", &config), Role::Bot);
    }

    #[test]
    fn test_trace_matches_inputs() {
        let request = PersonaRequest::new("Jungle", ["j4", "lee", "nobody"]);
        let result = compute_persona(&request, &catalog(), &PersonaConfig::default());

        assert_eq!(result.trace.len(), 3);
        assert_eq!(result.trace[0].id.as_deref(), Some("JarvanIV"));
        assert_eq!(result.trace[0].method, Some(MatchMethod::Alias));
        assert_eq!(result.trace[0].tags, vec![ClassTag::Tank, ClassTag::Fighter]);
        assert_eq!(result.trace[1].id.as_deref(), Some("LeeSin"));
        assert_eq!(result.trace[1].method, Some(MatchMethod::Prefix));
        assert_eq!(result.trace[2].id, None);
        assert_eq!(result.trace[2].source, TraitSource::Neutral);
    }

    #[test]
    fn test_quip_matches_archetype() {
        let request = PersonaRequest::new("Jungle", ["j4", "lee", "kha"]);
        let result = compute_persona(&request, &catalog(), &PersonaConfig::default());
        assert_eq!(result.quip, result.archetype.quip());
        assert_eq!(result.counts.total(), 3);
        assert!(result.strengths.len() <= 4);
        assert!(result.blind_spots.len() <= 4);
    }
}

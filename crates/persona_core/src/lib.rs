//! # persona_core - Deterministic Playstyle Persona Engine
//!
//! Turns a role and three champion picks into a playstyle persona: six trait
//! scores, a named archetype with its quip, and strength/blind-spot lines.
//!
//! ## Features
//! - Fuzzy champion name resolution (aliases, exact, prefix, substring)
//! - Hand-tuned trait overrides with a computed fallback from catalog data
//! - Role-weighted aggregation with composition nudges and easing
//! - Ordered archetype and narrative rule tables
//! - JSON API and a small engine that keeps the last result for caching
//!
//! The pipeline is pure: identical request and catalog snapshot always
//! yield an identical result.

#![allow(clippy::doc_lazy_continuation)]

pub mod aggregate;
pub mod api;
pub mod archetype;
pub mod catalog;
pub mod config;
pub mod error;
pub mod narrative;
pub mod resolve;
pub mod roles;
pub mod traits;

pub use aggregate::{aggregate_team, RoleAggregator, TeamAggregate};
pub use api::{
    compute_persona, compute_persona_json, PersonaCacheRecord, PersonaEngine, PersonaRequest,
    PersonaResult, ResolutionTrace,
};
pub use archetype::{select_archetype, Archetype};
pub use catalog::{CatalogSnapshot, ChampionRecord, ClassTag, CombatInfo};
pub use config::PersonaConfig;
pub use error::{CatalogError, ConfigError, PersonaError, Result};
pub use narrative::{DerivedAxes, Narrative};
pub use resolve::{canonicalize, resolve_champion, resolve_champion_id, MatchMethod};
pub use roles::Role;
pub use traits::{TraitField, TraitVector};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Public entry points: direct computation, the engine, and the JSON API

pub mod engine;
pub mod persona;
pub mod persona_json;

pub use engine::{PersonaCacheRecord, PersonaEngine};
pub use persona::{
    compute_persona, resolve_role, PersonaRequest, PersonaResult, ResolutionTrace,
};
pub use persona_json::compute_persona_json;

//! Persona engine configuration
//!
//! Every knob has a default that reproduces the stock scoring pipeline, so
//! an empty JSON object is a valid config.
//!
//! ## Usage
//!
//! ```rust
//! use persona_core::config::PersonaConfig;
//!
//! let config = PersonaConfig::from_json(r#"{"off_role_scale": 0.9}"#).unwrap();
//! assert_eq!(config.neutral_trait_value, 60);
//! ```
//!
//! ## Environment Variables
//!
//! - `PERSONA_CONFIG_PATH`: path to a JSON config file read by
//!   [`PersonaConfig::from_env_or_default`]

use crate::aggregate::EASING_EXPONENT;
use crate::error::ConfigError;
use crate::roles::Role;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub const CONFIG_PATH_ENV: &str = "PERSONA_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    /// Role used when a request names no recognisable role
    pub default_role: Role,
    /// Value of every field for a champion name that resolves to nothing
    pub neutral_trait_value: u8,
    /// Multiplier for champions played outside their usual role
    pub off_role_scale: f64,
    /// Exponent of the final easing curve
    pub easing_exponent: f64,
    /// Cap on strength and blind-spot lines
    pub max_narrative_lines: usize,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            default_role: Role::default(),
            neutral_trait_value: 60,
            off_role_scale: 0.94,
            easing_exponent: EASING_EXPONENT,
            max_narrative_lines: 4,
        }
    }
}

impl PersonaConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_json(&content)
    }

    /// Load from `PERSONA_CONFIG_PATH` when set, otherwise defaults.
    ///
    /// A config file that fails to load is logged and ignored.
    pub fn from_env_or_default() -> Self {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Self::default();
        };

        let path = path.trim();
        if path.is_empty() {
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                info!(path, "loaded persona config");
                config
            }
            Err(e) => {
                warn!(path, error = %e, "ignoring persona config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.neutral_trait_value > 100 {
            return Err(ConfigError::Invalid {
                field: "neutral_trait_value",
                reason: format!("{} is above 100", self.neutral_trait_value),
            });
        }
        if !(self.off_role_scale > 0.0 && self.off_role_scale <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "off_role_scale",
                reason: format!("{} is outside (0, 1]", self.off_role_scale),
            });
        }
        if !(self.easing_exponent > 0.0 && self.easing_exponent <= 2.0) {
            return Err(ConfigError::Invalid {
                field: "easing_exponent",
                reason: format!("{} is outside (0, 2]", self.easing_exponent),
            });
        }
        if self.max_narrative_lines == 0 {
            return Err(ConfigError::Invalid {
                field: "max_narrative_lines",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

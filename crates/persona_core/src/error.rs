use thiserror::Error;

/// Errors raised while building a catalog snapshot from external data.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog JSON could not be parsed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog entry '{key}' is malformed: {source}")]
    MalformedEntry {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate champion id: {0}")]
    DuplicateId(String),
}

/// Errors raised while loading or validating [`crate::config::PersonaConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// A role name that does not match any of the five lanes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

#[derive(Error, Debug)]
pub enum PersonaError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid persona request: {0}")]
    InvalidRequest(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PersonaError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            PersonaError::InvalidRequest(err.to_string())
        } else {
            PersonaError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, PersonaError>;

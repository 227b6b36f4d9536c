//! ENG-prefixed error types with structured error codes.

#![allow(missing_docs)]

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Top-level error type for the engine panel core.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("[ENG-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[ENG-1002] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[ENG-2001] engine lookup failure: group {group:?} has no engine {engine:?}")]
    EngineLookup { group: String, engine: String },

    #[error("[ENG-2002] malformed reading for {name:?}: {details}")]
    MalformedReading { name: String, details: String },

    #[error("[ENG-2101] snapshot parse failure: {details}")]
    SnapshotParse { details: String },
}

impl EngineError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "ENG-1001",
            Self::ConfigParse { .. } => "ENG-1002",
            Self::EngineLookup { .. } => "ENG-2001",
            Self::MalformedReading { .. } => "ENG-2002",
            Self::SnapshotParse { .. } => "ENG-2101",
        }
    }

    /// Convenience constructor for curated-catalog lookup failures.
    #[must_use]
    pub fn lookup(group: impl Into<String>, engine: impl Into<String>) -> Self {
        Self::EngineLookup {
            group: group.into(),
            engine: engine.into(),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(value: serde_json::Error) -> Self {
        Self::SnapshotParse {
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for EngineError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}

//! Error type shared by model construction and inference.

use thiserror::Error;

/// Everything that can go wrong while building or running a fuzzy system.
#[derive(Debug, Error)]
pub enum FuzzyError {
    #[error("invalid {shape} parameters: {reason}")]
    InvalidParameters { shape: &'static str, reason: String },

    #[error("invalid universe: {0}")]
    InvalidUniverse(String),

    #[error("invalid fuzzy set '{name}': {reason}")]
    InvalidSet { name: String, reason: String },

    #[error("duplicate {kind} name '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    #[error("value {value} is not a sample of the '{variable}' universe")]
    ValueNotInUniverse { variable: String, value: f64 },

    #[error("no membership for term '{term}' of variable '{variable}'")]
    MissingMembership { variable: String, term: String },

    #[error("rule '{rule}' has no specified antecedents")]
    EmptyAntecedent { rule: String },

    #[error("no input value supplied for variable '{0}'")]
    MissingInput(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for fuzzy model and inference operations.
pub type FuzzyResult<T> = Result<T, FuzzyError>;

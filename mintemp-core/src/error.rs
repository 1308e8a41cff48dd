use std::path::PathBuf;

use thiserror::Error;

/// The model could not produce a prediction for a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelInferenceError {
    #[error("feature '{name}' is not a finite number ({value})")]
    NonFiniteFeature { name: &'static str, value: f64 },

    #[error("model '{model}' produced a non-finite output ({value})")]
    NonFiniteOutput { model: String, value: f64 },

    #[error("tree {tree} did not reach a leaf after {steps} steps")]
    UnterminatedTree { tree: usize, steps: usize },

    #[error("model '{model}' failed: {reason}")]
    Failed { model: String, reason: String },
}

/// A model artifact could not be turned into a usable model.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("failed to read model artifact {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported model artifact extension for {} (expected .json or .toml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse JSON model artifact")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML model artifact")]
    Toml(#[from] toml::de::Error),

    #[error("model expects features {found:?}, but inputs are {expected:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

/// User input outside the domain the model was trained on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputDomainError {
    #[error("year {value} is outside {min}..={max}")]
    Year { value: i32, min: i32, max: i32 },

    #[error("day of year {value} is outside {min}..={max}")]
    DayOfYear { value: u16, min: u16, max: u16 },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
}

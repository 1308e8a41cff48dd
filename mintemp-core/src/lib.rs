//! Core library for the `mintemp` CLI.
//!
//! This crate defines:
//! - The prediction input and the record handed to a model
//! - The model boundary and artifact-backed regressors
//! - The advisory ladder and the predictor tying it together
//! - Configuration handling
//!
//! It is used by `mintemp-cli`, but can also be reused by other binaries or services.

pub mod advisory;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod predictor;
pub mod regressor;

pub use advisory::{AdvisoryLabel, Severity};
pub use config::Config;
pub use error::{InputDomainError, ModelInferenceError, ModelLoadError};
pub use input::PredictionInput;
pub use model::{FeatureRecord, Prediction, PredictionResult};
pub use predictor::{Predictor, predict};
pub use regressor::{TemperatureModel, load_model};

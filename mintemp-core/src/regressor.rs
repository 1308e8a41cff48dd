use std::{fmt::Debug, path::Path};

use crate::{
    error::{ModelInferenceError, ModelLoadError},
    model::FeatureRecord,
};

pub mod artifact;
pub mod forest;
pub mod linear;

pub use artifact::{EstimatorSpec, ModelArtifact, NodeSpec, TreeSpec};
pub use forest::ForestRegressor;
pub use linear::LinearRegressor;

/// A pre-trained model mapping one feature record to a minimum temperature.
///
/// Implementations are immutable once built, so a single instance can serve
/// every prediction of the process.
pub trait TemperatureModel: Send + Sync + Debug {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelInferenceError>;

    fn name(&self) -> &str;

    /// Short estimator family name, e.g. "linear".
    fn kind(&self) -> &'static str;
}

/// Load a model artifact from disk and build the model it describes.
pub fn load_model(path: &Path) -> Result<Box<dyn TemperatureModel>, ModelLoadError> {
    let artifact = ModelArtifact::from_path(path)?;
    let model = artifact.into_model()?;

    tracing::info!(
        path = %path.display(),
        model = model.name(),
        kind = model.kind(),
        "loaded model"
    );

    Ok(model)
}

pub(crate) fn ensure_finite_features(record: &FeatureRecord) -> Result<(), ModelInferenceError> {
    match record.fields().find(|(_, value)| !value.is_finite()) {
        Some((name, value)) => Err(ModelInferenceError::NonFiniteFeature { name, value }),
        None => Ok(()),
    }
}

pub(crate) fn ensure_finite_output(model: &str, value: f64) -> Result<f64, ModelInferenceError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelInferenceError::NonFiniteOutput {
            model: model.to_string(),
            value,
        })
    }
}

use crate::{
    error::{ModelInferenceError, ModelLoadError},
    model::FeatureRecord,
};

use super::{TemperatureModel, ensure_finite_features, ensure_finite_output};

/// Ordinary least-squares style model: `intercept + Σ coefficient · feature`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressor {
    name: String,
    intercept: f64,
    coefficients: [f64; 4],
}

impl LinearRegressor {
    pub fn new(name: String, intercept: f64, coefficients: &[f64]) -> Result<Self, ModelLoadError> {
        let coefficients: [f64; 4] = coefficients.try_into().map_err(|_| {
            ModelLoadError::Invalid(format!(
                "linear model needs 4 coefficients, got {}",
                coefficients.len()
            ))
        })?;

        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelLoadError::Invalid(
                "linear model parameters must be finite".to_string(),
            ));
        }

        Ok(Self {
            name,
            intercept,
            coefficients,
        })
    }
}

impl TemperatureModel for LinearRegressor {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelInferenceError> {
        ensure_finite_features(record)?;

        let value = self
            .coefficients
            .iter()
            .zip(record.values())
            .fold(self.intercept, |acc, (c, x)| acc + c * x);

        ensure_finite_output(&self.name, value)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PredictionInput;

    #[test]
    fn predicts_weighted_sum() {
        let model = LinearRegressor::new("lr".into(), 1.0, &[0.0, 0.01, 0.5, 0.25])
            .expect("valid model");
        let record = FeatureRecord::from(&PredictionInput::new(2019, 180, 5.0, 7.0));

        // 1.0 + 1.8 + 2.5 + 1.75
        let value = model.predict(&record).expect("prediction");
        assert!((value - 7.05).abs() < 1e-9, "got {value}");
    }

    #[test]
    fn wrong_coefficient_count_is_rejected() {
        let err = LinearRegressor::new("lr".into(), 0.0, &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(err.to_string().contains("needs 4 coefficients, got 3"));
    }

    #[test]
    fn non_finite_parameters_are_rejected() {
        assert!(LinearRegressor::new("lr".into(), f64::NAN, &[0.0; 4]).is_err());
        assert!(LinearRegressor::new("lr".into(), 0.0, &[0.0, f64::INFINITY, 0.0, 0.0]).is_err());
    }

    #[test]
    fn overflowing_output_is_an_inference_error() {
        let model = LinearRegressor::new("huge".into(), 0.0, &[0.0, 0.0, f64::MAX, f64::MAX])
            .expect("valid model");
        let record = FeatureRecord::from(&PredictionInput::new(2019, 180, 10.0, 10.0));

        let err = model.predict(&record).unwrap_err();
        assert!(matches!(err, ModelInferenceError::NonFiniteOutput { .. }));
    }
}

use serde::Serialize;

use crate::{advisory::AdvisoryLabel, input::PredictionInput};

/// Column names the regression models were trained with, in input order.
pub const FEATURE_NAMES: [&str; 4] = ["Year", "DayOfYear", "Rolling7", "Rolling30"];

/// A single named-field row handed to a model.
///
/// Field order is always `FEATURE_NAMES`, no matter how the input was built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    values: [f64; 4],
}

impl FeatureRecord {
    pub fn values(&self) -> &[f64; 4] {
        &self.values
    }

    /// (name, value) pairs in record order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }
}

impl From<&PredictionInput> for FeatureRecord {
    fn from(input: &PredictionInput) -> Self {
        Self {
            values: [
                f64::from(input.year),
                f64::from(input.day_of_year),
                input.rolling7,
                input.rolling30,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub min_temperature_c: f64,
}

/// Outcome of one interaction: the predicted value and its advisory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    #[serde(flatten)]
    pub result: PredictionResult,
    pub advisory: AdvisoryLabel,
}

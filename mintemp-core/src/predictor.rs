use crate::{
    advisory::AdvisoryLabel,
    error::ModelInferenceError,
    input::PredictionInput,
    model::{FeatureRecord, Prediction, PredictionResult},
    regressor::{TemperatureModel, ensure_finite_output},
};

/// Run one prediction and derive its advisory.
///
/// `input` is expected to be validated already. The model sees a single
/// record in fixed field order and its scalar answer becomes
/// `min_temperature_c`.
pub fn predict(
    input: &PredictionInput,
    model: &dyn TemperatureModel,
) -> Result<Prediction, ModelInferenceError> {
    let record = FeatureRecord::from(input);
    let min_temperature_c = ensure_finite_output(model.name(), model.predict(&record)?)?;

    let advisory =
        AdvisoryLabel::classify(min_temperature_c).ok_or_else(|| ModelInferenceError::NonFiniteOutput {
            model: model.name().to_string(),
            value: min_temperature_c,
        })?;

    tracing::debug!(
        model = model.name(),
        year = input.year,
        day_of_year = input.day_of_year,
        rolling7 = input.rolling7,
        rolling30 = input.rolling30,
        min_temperature_c,
        %advisory,
        "prediction"
    );

    Ok(Prediction {
        result: PredictionResult { min_temperature_c },
        advisory,
    })
}

/// Owns the process-wide model and answers predictions with it.
#[derive(Debug)]
pub struct Predictor {
    model: Box<dyn TemperatureModel>,
}

impl Predictor {
    pub fn new(model: Box<dyn TemperatureModel>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &dyn TemperatureModel {
        self.model.as_ref()
    }

    pub fn predict(&self, input: &PredictionInput) -> Result<Prediction, ModelInferenceError> {
        predict(input, self.model.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regressor::testing::{ConstantModel, FailingModel, RecordingModel};

    fn scenario_input() -> PredictionInput {
        PredictionInput::new(2019, 180, 5.0, 7.0)
    }

    #[test]
    fn freezing_scenario() {
        let prediction = predict(&scenario_input(), &ConstantModel(-2.5)).expect("prediction");

        assert_eq!(prediction.result.min_temperature_c, -2.5);
        assert_eq!(prediction.advisory, AdvisoryLabel::Freezing);
    }

    #[test]
    fn cold_scenario() {
        let prediction = predict(&scenario_input(), &ConstantModel(3.0)).expect("prediction");

        assert_eq!(prediction.result.min_temperature_c, 3.0);
        assert_eq!(prediction.advisory, AdvisoryLabel::Cold);
    }

    #[test]
    fn mild_scenario() {
        let prediction = predict(&scenario_input(), &ConstantModel(10.0)).expect("prediction");

        assert_eq!(prediction.result.min_temperature_c, 10.0);
        assert_eq!(prediction.advisory, AdvisoryLabel::Mild);
    }

    #[test]
    fn boundary_values_through_predictor() {
        let cases = [
            (0.0, AdvisoryLabel::Cold),
            (-0.01, AdvisoryLabel::Freezing),
            (5.0, AdvisoryLabel::Mild),
            (4.99, AdvisoryLabel::Cold),
        ];

        for (value, expected) in cases {
            let prediction = predict(&scenario_input(), &ConstantModel(value)).expect("prediction");
            assert_eq!(prediction.advisory, expected, "value {value}");
        }
    }

    #[test]
    fn model_failure_surfaces_inference_error() {
        let err = predict(&scenario_input(), &FailingModel).unwrap_err();

        assert!(matches!(err, ModelInferenceError::Failed { .. }));
        assert!(err.to_string().contains("malformed input shape"));
    }

    #[test]
    fn nan_output_is_an_inference_error() {
        let err = predict(&scenario_input(), &ConstantModel(f64::NAN)).unwrap_err();

        assert!(matches!(err, ModelInferenceError::NonFiniteOutput { .. }));
    }

    #[test]
    fn infinite_output_is_an_inference_error() {
        for value in [f64::INFINITY, f64::NEG_INFINITY] {
            let err = predict(&scenario_input(), &ConstantModel(value)).unwrap_err();

            assert_eq!(
                err,
                ModelInferenceError::NonFiniteOutput {
                    model: "constant".to_string(),
                    value,
                },
                "value {value}"
            );
        }
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let predictor = Predictor::new(Box::new(ConstantModel(1.25)));
        let input = scenario_input();

        let first = predictor.predict(&input).expect("prediction");
        for _ in 0..10 {
            assert_eq!(predictor.predict(&input).expect("prediction"), first);
        }
    }

    #[test]
    fn model_sees_fields_in_fixed_order() {
        let model = RecordingModel::default();
        let input = PredictionInput {
            rolling30: 7.0,
            day_of_year: 180,
            rolling7: 5.0,
            year: 2019,
        };

        predict(&input, &model).expect("prediction");

        let seen = model.seen.lock().expect("recording lock poisoned");
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0],
            vec![
                ("Year", 2019.0),
                ("DayOfYear", 180.0),
                ("Rolling7", 5.0),
                ("Rolling30", 7.0),
            ]
        );
    }

    #[test]
    fn failure_does_not_affect_next_interaction() {
        let failing = Predictor::new(Box::new(FailingModel));
        assert!(failing.predict(&scenario_input()).is_err());

        let working = Predictor::new(Box::new(ConstantModel(6.0)));
        assert_eq!(
            working.predict(&scenario_input()).expect("prediction").advisory,
            AdvisoryLabel::Mild
        );
        assert!(failing.predict(&scenario_input()).is_err());
        assert_eq!(working.model().name(), "constant");
    }
}

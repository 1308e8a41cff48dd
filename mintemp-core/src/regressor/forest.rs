use crate::{
    error::{ModelInferenceError, ModelLoadError},
    model::{FEATURE_NAMES, FeatureRecord},
};

use super::{TemperatureModel, ensure_finite_features, ensure_finite_output};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node {
    /// Go to `left` when `x[feature] <= threshold`, else to `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// A regression tree stored as a flat node array; node 0 is the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new(nodes: Vec<Node>) -> Result<Self, ModelLoadError> {
        if nodes.is_empty() {
            return Err(ModelLoadError::Invalid("tree has no nodes".to_string()));
        }

        for (idx, node) in nodes.iter().enumerate() {
            match *node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= FEATURE_NAMES.len() {
                        return Err(ModelLoadError::Invalid(format!(
                            "node {idx} splits on unknown feature index {feature}"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(ModelLoadError::Invalid(format!(
                            "node {idx} has a non-finite threshold"
                        )));
                    }
                    if left >= nodes.len() || right >= nodes.len() {
                        return Err(ModelLoadError::Invalid(format!(
                            "node {idx} points outside the tree ({left}, {right})"
                        )));
                    }
                }
                Node::Leaf { value } if !value.is_finite() => {
                    return Err(ModelLoadError::Invalid(format!(
                        "leaf {idx} has a non-finite value"
                    )));
                }
                Node::Leaf { .. } => {}
            }
        }

        Ok(Self { nodes })
    }

    fn evaluate(&self, tree: usize, x: &[f64; 4]) -> Result<f64, ModelInferenceError> {
        let mut idx = 0;

        // Feature and child indexes were range-checked in `new`; only
        // cycles remain, and an acyclic tree visits each node at most once.
        for _ in 0..self.nodes.len() {
            match self.nodes[idx] {
                Node::Leaf { value } => return Ok(value),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if x[feature] <= threshold { left } else { right };
                }
            }
        }

        Err(ModelInferenceError::UnterminatedTree {
            tree,
            steps: self.nodes.len(),
        })
    }
}

/// Averaging ensemble of regression trees (random-forest style).
#[derive(Debug, Clone, PartialEq)]
pub struct ForestRegressor {
    name: String,
    trees: Vec<Tree>,
}

impl ForestRegressor {
    pub fn new(name: String, trees: Vec<Tree>) -> Result<Self, ModelLoadError> {
        if trees.is_empty() {
            return Err(ModelLoadError::Invalid("forest has no trees".to_string()));
        }

        Ok(Self { name, trees })
    }
}

impl TemperatureModel for ForestRegressor {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelInferenceError> {
        ensure_finite_features(record)?;

        let x = record.values();
        let mut sum = 0.0;
        for (i, tree) in self.trees.iter().enumerate() {
            sum += tree.evaluate(i, x)?;
        }

        ensure_finite_output(&self.name, sum / self.trees.len() as f64)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "forest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PredictionInput;

    fn stump(feature: usize, threshold: f64, low: f64, high: f64) -> Tree {
        Tree::new(vec![
            Node::Split {
                feature,
                threshold,
                left: 1,
                right: 2,
            },
            Node::Leaf { value: low },
            Node::Leaf { value: high },
        ])
        .expect("valid stump")
    }

    fn record(rolling7: f64, rolling30: f64) -> FeatureRecord {
        FeatureRecord::from(&PredictionInput::new(2019, 180, rolling7, rolling30))
    }

    #[test]
    fn split_goes_left_on_equal_threshold() {
        let forest = ForestRegressor::new("f".into(), vec![stump(2, 5.0, -1.0, 8.0)])
            .expect("valid forest");

        assert_eq!(forest.predict(&record(5.0, 7.0)), Ok(-1.0));
        assert_eq!(forest.predict(&record(5.5, 7.0)), Ok(8.0));
    }

    #[test]
    fn forest_averages_trees() {
        let forest = ForestRegressor::new(
            "f".into(),
            vec![stump(2, 5.0, -2.0, 4.0), stump(3, 10.0, 2.0, 6.0)],
        )
        .expect("valid forest");

        // (-2 + 2) / 2
        assert_eq!(forest.predict(&record(3.0, 7.0)), Ok(0.0));
        // (4 + 6) / 2
        assert_eq!(forest.predict(&record(9.0, 12.0)), Ok(5.0));
    }

    #[test]
    fn splits_on_every_feature_index() {
        // Year 2019, DayOfYear 180, Rolling7 5.0, Rolling30 7.0
        let thresholds = [2019.0, 180.0, 5.0, 7.0];

        for (feature, threshold) in thresholds.into_iter().enumerate() {
            let at = ForestRegressor::new("f".into(), vec![stump(feature, threshold, 1.0, 2.0)])
                .expect("valid forest");
            let below = ForestRegressor::new(
                "f".into(),
                vec![stump(feature, threshold - 0.5, 1.0, 2.0)],
            )
            .expect("valid forest");

            assert_eq!(at.predict(&record(5.0, 7.0)), Ok(1.0), "feature {feature}");
            assert_eq!(below.predict(&record(5.0, 7.0)), Ok(2.0), "feature {feature}");
        }
    }

    #[test]
    fn empty_forest_and_tree_are_rejected() {
        assert!(ForestRegressor::new("f".into(), vec![]).is_err());
        assert!(Tree::new(vec![]).is_err());
    }

    #[test]
    fn out_of_range_references_are_rejected() {
        let bad_child = Tree::new(vec![Node::Split {
            feature: 0,
            threshold: 1.0,
            left: 1,
            right: 7,
        }]);
        assert!(bad_child.unwrap_err().to_string().contains("points outside"));

        let bad_feature = Tree::new(vec![
            Node::Split {
                feature: 4,
                threshold: 1.0,
                left: 1,
                right: 1,
            },
            Node::Leaf { value: 0.0 },
        ]);
        assert!(bad_feature.unwrap_err().to_string().contains("unknown feature"));
    }

    #[test]
    fn cyclic_tree_fails_inference() {
        let tree = Tree::new(vec![Node::Split {
            feature: 0,
            threshold: 0.0,
            left: 0,
            right: 0,
        }])
        .expect("structurally valid");
        let forest = ForestRegressor::new("loop".into(), vec![tree]).expect("valid forest");

        let err = forest.predict(&record(5.0, 7.0)).unwrap_err();
        assert_eq!(err, ModelInferenceError::UnterminatedTree { tree: 0, steps: 1 });
    }
}

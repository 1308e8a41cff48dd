use std::{fs, path::Path};

use serde::Deserialize;

use crate::{error::ModelLoadError, model::FEATURE_NAMES};

use super::{
    ForestRegressor, LinearRegressor, TemperatureModel,
    forest::{Node, Tree},
};

/// Serialized form of a trained model.
///
/// Example JSON:
/// {
///   "name": "canberra-min-temp",
///   "feature_names": ["Year", "DayOfYear", "Rolling7", "Rolling30"],
///   "estimator": { "type": "linear", "intercept": 0.1, "coefficients": [0, 0, 0.6, 0.4] }
/// }
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    pub feature_names: Vec<String>,
    pub estimator: EstimatorSpec,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EstimatorSpec {
    Linear {
        intercept: f64,
        coefficients: Vec<f64>,
    },
    Forest {
        trees: Vec<TreeSpec>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreeSpec {
    pub nodes: Vec<NodeSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
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

impl From<NodeSpec> for Node {
    fn from(spec: NodeSpec) -> Self {
        match spec {
            NodeSpec::Split {
                feature,
                threshold,
                left,
                right,
            } => Node::Split {
                feature,
                threshold,
                left,
                right,
            },
            NodeSpec::Leaf { value } => Node::Leaf { value },
        }
    }
}

impl ModelArtifact {
    /// Read an artifact, picking the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ModelLoadError> {
        let contents = fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            Some("toml") => Self::from_toml_str(&contents),
            _ => Err(ModelLoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ModelLoadError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ModelLoadError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validate the artifact and build the model it describes.
    pub fn into_model(self) -> Result<Box<dyn TemperatureModel>, ModelLoadError> {
        if self.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES) {
            return Err(ModelLoadError::FeatureMismatch {
                expected: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
                found: self.feature_names,
            });
        }

        let boxed: Box<dyn TemperatureModel> = match self.estimator {
            EstimatorSpec::Linear {
                intercept,
                coefficients,
            } => Box::new(LinearRegressor::new(self.name, intercept, &coefficients)?),
            EstimatorSpec::Forest { trees } => {
                let trees = trees
                    .into_iter()
                    .map(|t| Tree::new(t.nodes.into_iter().map(Node::from).collect()))
                    .collect::<Result<Vec<_>, _>>()?;
                Box::new(ForestRegressor::new(self.name, trees)?)
            }
        };

        Ok(boxed)
    }
}

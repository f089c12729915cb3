//! Classifier artifact: a serialized binary phishing model.
//!
//! The training collaborator fits a logistic model offline and exports it as
//! JSON; at runtime the artifact is opaque beyond two operations: a class
//! label in {0, 1} and a 2-class probability distribution per feature row.
//! The artifact is never mutated after load.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::features::{FEATURE_COUNT, FeatureVector};

/// Errors raised while loading or validating a model artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("weight dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("threshold {0} not in [0, 1]")]
    InvalidThreshold(f64),
    #[error("non-finite weight at index {index}: {value}")]
    NonFiniteWeight { index: usize, value: f64 },
    #[error("non-finite intercept: {0}")]
    NonFiniteIntercept(f64),
    #[error("model JSON parse error: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("model file IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Pre-fitted binary classifier, deserialized from the artifact file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierModel {
    /// Human-readable model identifier.
    pub model_id: String,
    /// Semantic version of the artifact format.
    pub model_version: String,
    /// Weight vector, one per feature slot.
    pub weights: Vec<f64>,
    /// Intercept term.
    pub intercept: f64,
    /// Decision threshold: phishing probability >= threshold → label 1.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Feature names for cross-checking slot order (optional in the file).
    #[serde(default)]
    pub feature_names: Vec<String>,
}

fn default_threshold() -> f64 {
    0.5
}

impl ClassifierModel {
    /// Parse and validate an artifact from its JSON serialization.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Load an artifact from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Check the artifact is structurally sound before first use.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.weights.len() != FEATURE_COUNT {
            return Err(ModelError::DimensionMismatch {
                expected: FEATURE_COUNT,
                got: self.weights.len(),
            });
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ModelError::InvalidThreshold(self.threshold));
        }
        for (i, &w) in self.weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(ModelError::NonFiniteWeight { index: i, value: w });
            }
        }
        if !self.intercept.is_finite() {
            return Err(ModelError::NonFiniteIntercept(self.intercept));
        }
        Ok(())
    }

    /// Class label for one feature row: 1 (phishing) or 0 (benign).
    pub fn predict(&self, features: &FeatureVector) -> u8 {
        let p = self.phishing_probability(features);
        u8::from(p >= self.threshold)
    }

    /// Probability distribution over [benign, phishing] for one feature row.
    pub fn predict_proba(&self, features: &FeatureVector) -> [f64; 2] {
        let p = self.phishing_probability(features);
        [1.0 - p, p]
    }

    fn phishing_probability(&self, features: &FeatureVector) -> f64 {
        let z = dot(&self.weights, features.as_slice()) + self.intercept;
        sigmoid(z)
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Numerically stable logistic sigmoid.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let ez = z.exp();
        ez / (1.0 + ez)
    }
}

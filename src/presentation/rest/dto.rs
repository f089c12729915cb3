use serde::{Deserialize, Serialize};

use crate::application::PredictionResult;

/// Request to classify a URL. `url` is optional at the wire level so a
/// missing field can be reported as a client error instead of a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Successful classification response.
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub prediction: u8,
    pub phishing_probability: f64,
    pub safe_probability: f64,
    pub features_extracted: usize,
}

impl PredictResponse {
    pub fn from_result(result: &PredictionResult) -> Self {
        PredictResponse {
            prediction: result.prediction,
            phishing_probability: result.phishing_probability,
            safe_probability: result.safe_probability,
            features_extracted: result.features_extracted,
        }
    }
}

/// Liveness probe response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
        }
    }
}

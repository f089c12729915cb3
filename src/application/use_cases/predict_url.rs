use std::sync::Arc;

use crate::application::ports::ModelProvider;
use crate::domain::{ClassifierModel, FEATURE_COUNT, extract};

/// A classification request as received from the wire: the URL field may be
/// absent, which is only reported once the artifact is known to be usable.
#[derive(Debug, Clone)]
pub struct PredictUrlCommand {
    pub url: Option<String>,
}

/// Outcome of one classification request.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    /// 1 = phishing, 0 = benign.
    pub prediction: u8,
    /// Phishing-class probability, rounded to 3 decimals.
    pub phishing_probability: f64,
    /// Benign-class probability, rounded to 3 decimals.
    pub safe_probability: f64,
    /// Slot count actually produced, for caller-side verification.
    pub features_extracted: usize,
}

/// Classify a URL with the shared model artifact.
///
/// Extraction never fails (malformed input yields the all-zero vector), so
/// the only failure modes here are an unavailable artifact and the
/// defensive invariant checks around inference.
pub struct PredictUrlUseCase<P: ModelProvider> {
    models: Arc<P>,
}

impl<P: ModelProvider> PredictUrlUseCase<P> {
    pub fn new(models: Arc<P>) -> Self {
        Self { models }
    }

    pub fn execute(&self, command: PredictUrlCommand) -> Result<PredictionResult, PredictError> {
        // Artifact availability is checked before the payload: a request
        // without a URL against an unloadable artifact reports the artifact.
        let model = self
            .models
            .ensure_loaded()
            .map_err(|e| PredictError::ModelUnavailable(e.to_string()))?;

        let url = command.url.ok_or(PredictError::MissingUrl)?;

        run_inference(&model, &url)
    }
}

fn run_inference(model: &ClassifierModel, url: &str) -> Result<PredictionResult, PredictError> {
    let features = extract(url);

    // Extraction guarantees the length, but the classifier contract is
    // independently observable at this boundary, so re-check it.
    if features.len() != FEATURE_COUNT {
        return Err(PredictError::FeatureCountMismatch {
            expected: FEATURE_COUNT,
            got: features.len(),
        });
    }

    let prediction = model.predict(&features);
    let proba = model.predict_proba(&features);
    let phishing = proba.get(1).copied().unwrap_or(0.0);
    let safe = proba.first().copied().unwrap_or(0.0);

    if !phishing.is_finite() || !safe.is_finite() {
        return Err(PredictError::Internal(
            "classifier produced a non-finite probability".to_string(),
        ));
    }

    Ok(PredictionResult {
        prediction,
        phishing_probability: round3(phishing),
        safe_probability: round3(safe),
        features_extracted: features.len(),
    })
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[derive(Debug, Clone)]
pub enum PredictError {
    /// Artifact failed to load; the caller may retry after operator action.
    ModelUnavailable(String),
    /// The request carried no URL field. The only client-attributable error.
    MissingUrl,
    /// Extractor invariant violation — indicates a feature-extraction bug.
    FeatureCountMismatch { expected: usize, got: usize },
    /// Catch-all for unexpected inference failures; never crashes the host.
    Internal(String),
}

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictError::ModelUnavailable(e) => write!(f, "Failed to load ML model: {}", e),
            PredictError::MissingUrl => write!(f, "Missing 'url' in request"),
            PredictError::FeatureCountMismatch { expected, got } => {
                write!(f, "Expected {} features, got {}", expected, got)
            }
            PredictError::Internal(msg) => write!(f, "Something went wrong: {}", msg),
        }
    }
}

impl std::error::Error for PredictError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelError;
    use parking_lot::RwLock;

    /// Provider that serves a fixed in-memory artifact, or none.
    struct StubProvider {
        model: RwLock<Option<Arc<ClassifierModel>>>,
    }

    impl StubProvider {
        fn with_model(model: ClassifierModel) -> Arc<Self> {
            Arc::new(Self {
                model: RwLock::new(Some(Arc::new(model))),
            })
        }

        fn empty() -> Arc<Self> {
            Arc::new(Self {
                model: RwLock::new(None),
            })
        }
    }

    impl ModelProvider for StubProvider {
        fn ensure_loaded(&self) -> Result<Arc<ClassifierModel>, ModelError> {
            self.model.read().clone().ok_or_else(|| {
                ModelError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no artifact",
                ))
            })
        }

        fn loaded(&self) -> Option<Arc<ClassifierModel>> {
            self.model.read().clone()
        }
    }

    fn zero_weight_model(intercept: f64) -> ClassifierModel {
        ClassifierModel {
            model_id: "stub".to_string(),
            model_version: "1.0.0".to_string(),
            weights: vec![0.0; FEATURE_COUNT],
            intercept,
            threshold: 0.5,
            feature_names: Vec::new(),
        }
    }

    #[test]
    fn fails_when_model_unavailable() {
        let use_case = PredictUrlUseCase::new(StubProvider::empty());
        let err = use_case
            .execute(PredictUrlCommand {
                url: Some("https://example.com".to_string()),
            })
            .unwrap_err();
        assert!(matches!(err, PredictError::ModelUnavailable(_)));
    }

    #[test]
    fn model_availability_is_checked_before_the_payload() {
        // No URL and no artifact: the artifact failure wins.
        let no_model = PredictUrlUseCase::new(StubProvider::empty());
        let err = no_model
            .execute(PredictUrlCommand { url: None })
            .unwrap_err();
        assert!(matches!(err, PredictError::ModelUnavailable(_)));

        // With a usable artifact the missing field is reported.
        let with_model =
            PredictUrlUseCase::new(StubProvider::with_model(zero_weight_model(0.0)));
        let err = with_model
            .execute(PredictUrlCommand { url: None })
            .unwrap_err();
        assert!(matches!(err, PredictError::MissingUrl));
    }

    #[test]
    fn probabilities_sum_to_one_after_rounding() {
        let use_case = PredictUrlUseCase::new(StubProvider::with_model(zero_weight_model(1.7)));
        let result = use_case
            .execute(PredictUrlCommand {
                url: Some("https://www.google.com".to_string()),
            })
            .unwrap();

        assert_eq!(result.features_extracted, FEATURE_COUNT);
        assert!(
            (result.phishing_probability + result.safe_probability - 1.0).abs() < 1e-3,
            "probabilities: {} + {}",
            result.phishing_probability,
            result.safe_probability
        );
    }

    #[test]
    fn label_matches_threshold_side() {
        // sigmoid(3) ≈ 0.953 → phishing; sigmoid(-3) ≈ 0.047 → benign.
        let phishy = PredictUrlUseCase::new(StubProvider::with_model(zero_weight_model(3.0)));
        let benign = PredictUrlUseCase::new(StubProvider::with_model(zero_weight_model(-3.0)));
        let cmd = PredictUrlCommand {
            url: Some("http://x.com".to_string()),
        };

        assert_eq!(phishy.execute(cmd.clone()).unwrap().prediction, 1);
        assert_eq!(benign.execute(cmd).unwrap().prediction, 0);
    }

    #[test]
    fn garbage_url_still_classifies_via_zero_vector() {
        let use_case = PredictUrlUseCase::new(StubProvider::with_model(zero_weight_model(0.0)));
        let result = use_case
            .execute(PredictUrlCommand {
                url: Some("http://[::broken".to_string()),
            })
            .unwrap();
        // Zero weights + zero vector: sigmoid(0) = 0.5 exactly.
        assert_eq!(result.phishing_probability, 0.5);
        assert_eq!(result.features_extracted, FEATURE_COUNT);
    }
}

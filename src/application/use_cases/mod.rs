mod predict_url;

pub use predict_url::{PredictError, PredictUrlCommand, PredictUrlUseCase, PredictionResult};

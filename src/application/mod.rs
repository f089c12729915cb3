pub mod ports;
pub mod use_cases;

pub use ports::ModelProvider;
pub use use_cases::{PredictError, PredictUrlCommand, PredictUrlUseCase, PredictionResult};

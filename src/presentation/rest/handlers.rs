use axum::{Json, extract::State};
use std::sync::Arc;

use crate::application::{PredictUrlCommand, PredictUrlUseCase};
use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// GET /
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Phishing detection API is running",
    })
}

/// POST /predict
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    // Payload validation lives in the use case, after the artifact check.
    // An empty or unparseable URL value is accepted and classified via the
    // fail-soft zero vector.
    let use_case = PredictUrlUseCase::new(Arc::clone(&state.model_store));

    let result = use_case.execute(PredictUrlCommand { url: req.url })?;

    Ok(Json(PredictResponse::from_result(&result)))
}

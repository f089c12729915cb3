use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::infrastructure::FileModelStore;

/// Application state shared across handlers - uses concrete infrastructure types
pub struct AppState {
    pub model_store: Arc<FileModelStore>,
}

impl AppState {
    pub fn new(model_store: Arc<FileModelStore>) -> Self {
        AppState { model_store }
    }
}

/// Create the REST API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/predict", post(handlers::predict))
        // Middleware: permissive CORS because the browser extension calls
        // the endpoint cross-origin.
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

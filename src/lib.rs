//! PhishGuard
//!
//! A URL phishing classification service: a deterministic feature extractor
//! maps a URL string to a fixed 49-slot numeric vector and a pre-trained
//! classifier artifact turns it into a label plus calibrated probabilities,
//! served over a synchronous REST endpoint.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture with clear separation of concerns:
//!
//! - **Domain**: Pure logic (URI splitting, feature extraction, classifier math)
//! - **Application**: Use cases and port interfaces (PredictUrl, ModelProvider)
//! - **Infrastructure**: Implementations of ports (FileModelStore, config loading)
//! - **Presentation**: REST API handlers
//!
//! # Example
//!
//! ```ignore
//! use phishguard::{PhishGuard, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServiceConfig::default();
//!     let service = PhishGuard::new(config);
//!     service.run().await.unwrap();
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types
pub use domain::{
    ClassifierModel, FEATURE_COUNT, FEATURE_NAMES, FeatureVector, ModelError, UrlParts, extract,
};

pub use application::{
    ModelProvider, PredictError, PredictUrlCommand, PredictUrlUseCase, PredictionResult,
};

pub use infrastructure::{ConfigError, DEFAULT_MODEL_PATH, FileModelStore, ServiceConfig};

pub use presentation::{AppState, create_router};

use std::sync::Arc;
use tokio::net::TcpListener;

/// The classification service server
pub struct PhishGuard {
    pub config: ServiceConfig,
    pub model_store: Arc<FileModelStore>,
}

impl PhishGuard {
    /// Create a new service from configuration
    pub fn new(config: ServiceConfig) -> Self {
        let model_store = Arc::new(FileModelStore::new(&config.model_path));
        PhishGuard {
            config,
            model_store,
        }
    }

    /// Create the REST API router
    pub fn rest_router(&self) -> axum::Router {
        let state = Arc::new(AppState::new(Arc::clone(&self.model_store)));
        create_router(state)
    }

    /// Run the service
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // Eager load so a broken artifact shows up at startup rather than
        // on the first request; requests retry the load either way.
        self.model_store.preload();

        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let router = self.rest_router();

        tracing::info!("{} listening on {}", self.config.name, addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

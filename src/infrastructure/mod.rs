pub mod config;
pub mod model_store;

pub use config::{ConfigError, DEFAULT_MODEL_PATH, ServerConfig, ServiceConfig};
pub use model_store::FileModelStore;

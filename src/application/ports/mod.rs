mod model_provider;

pub use model_provider::ModelProvider;

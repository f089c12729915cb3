pub mod features;
pub mod model;
pub mod url_parts;

pub use features::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector, extract};
pub use model::{ClassifierModel, ModelError};
pub use url_parts::{SplitError, UrlParts};

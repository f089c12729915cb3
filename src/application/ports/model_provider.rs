use std::sync::Arc;

use crate::domain::{ClassifierModel, ModelError};

/// Access to the process-wide classifier artifact.
///
/// Implementations load the artifact at most once per process lifetime and
/// treat it as read-only after assignment. `ensure_loaded` is idempotent and
/// safe to race: concurrent loaders may each deserialize the artifact, the
/// last write wins and all copies behave identically because the source file
/// is immutable.
pub trait ModelProvider: Send + Sync {
    /// Return the artifact, attempting a load if none is held yet. A failed
    /// load leaves the slot unset so a later call can retry.
    fn ensure_loaded(&self) -> Result<Arc<ClassifierModel>, ModelError>;

    /// Peek at the currently held artifact without triggering a load.
    fn loaded(&self) -> Option<Arc<ClassifierModel>>;
}

//! File-backed classifier artifact store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::application::ports::ModelProvider;
use crate::domain::{ClassifierModel, ModelError};

/// Process-wide holder for the classifier artifact.
///
/// The artifact lives at a fixed path and is deserialized at most once on
/// the happy path: first use populates the slot, later calls clone the
/// shared handle. A failed load leaves the slot unset so the next request
/// retries. Racing loaders are harmless — the slot is re-checked under the
/// write lock and the artifact file is immutable.
pub struct FileModelStore {
    path: PathBuf,
    model: RwLock<Option<Arc<ClassifierModel>>>,
}

impl FileModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileModelStore {
            path: path.into(),
            model: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Eager load attempt for process startup. Returns whether the artifact
    /// is now available; failure is logged, not fatal, because `ensure_loaded`
    /// retries on first use.
    pub fn preload(&self) -> bool {
        match self.ensure_loaded() {
            Ok(model) => {
                tracing::info!(
                    model_id = %model.model_id,
                    version = %model.model_version,
                    "model loaded"
                );
                true
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "model load failed");
                false
            }
        }
    }
}

impl ModelProvider for FileModelStore {
    fn ensure_loaded(&self) -> Result<Arc<ClassifierModel>, ModelError> {
        if let Some(model) = self.model.read().clone() {
            return Ok(model);
        }

        // Deserialize outside the lock; the file is immutable so a racing
        // loader produces an identical artifact.
        let loaded = Arc::new(ClassifierModel::from_file(&self.path)?);

        let mut slot = self.model.write();
        if let Some(existing) = slot.clone() {
            return Ok(existing);
        }
        *slot = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    fn loaded(&self) -> Option<Arc<ClassifierModel>> {
        self.model.read().clone()
    }
}

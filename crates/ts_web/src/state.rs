use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use ts_core::{Error, Result};
use ts_inference::{ModelHandle, ModelLoader};

/// Where the page gets its model from on each interaction.
pub trait ModelSource: Send + Sync {
    fn model(&self) -> Result<ModelHandle>;
}

/// The configured model path, resolved through the shared loader cache.
pub struct CachedModel {
    loader: Arc<ModelLoader>,
    path: PathBuf,
}

impl CachedModel {
    pub fn new(loader: Arc<ModelLoader>, path: impl Into<PathBuf>) -> Self {
        Self { loader, path: path.into() }
    }
}

impl ModelSource for CachedModel {
    fn model(&self) -> Result<ModelHandle> {
        self.loader.load(&self.path)
    }
}

pub struct AppState {
    pub model_source: Arc<dyn ModelSource>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("model_source", &"<dyn ModelSource>")
            .finish()
    }
}

impl AppState {
    pub fn new(model_source: Arc<dyn ModelSource>) -> Self {
        Self { model_source }
    }

    /// Resolves the model off the async workers, since a cache miss reads the artifact.
    pub async fn resolve_model(&self) -> Result<ModelHandle> {
        let source = self.model_source.clone();
        tokio::task::spawn_blocking(move || source.model())
            .await
            .map_err(|e| Error::Deserialization(format!("model loading task failed: {}", e)))?
    }
}

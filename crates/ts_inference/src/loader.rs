//! Model loading with a path-keyed, load-once cache.

use std::collections::HashMap;
use std::fmt;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use once_cell::sync::OnceCell;
use tracing::{debug, info, warn};
use ts_core::{Error, Result, SummarizationModel};

use crate::artifact::{ModelArtifact, ModelFormat};
use crate::models::create_model;

pub type ModelHandle = Arc<dyn SummarizationModel>;

/// Source of artifact bytes.
pub trait ArtifactReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<Vec<u8>>;
}

/// Reads artifacts from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsReader;

impl ArtifactReader for FsReader {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).map_err(|e| match e.kind() {
            IoErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })
    }
}

/// Loads models and keeps every successful load for the life of the loader.
///
/// Each path gets its own cell, so the first load of a path runs once even
/// when several callers ask for it at the same time; the others wait and
/// receive the same handle. Failures are not cached and the next call for
/// that path tries again.
pub struct ModelLoader {
    reader: Box<dyn ArtifactReader>,
    cache: Mutex<HashMap<PathBuf, Arc<OnceCell<ModelHandle>>>>,
}

impl fmt::Debug for ModelLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = self.cache.lock().map(|c| c.len()).unwrap_or_default();
        f.debug_struct("ModelLoader")
            .field("reader", &"<dyn ArtifactReader>")
            .field("cached_paths", &cached)
            .finish()
    }
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelLoader {
    pub fn new() -> Self {
        Self::with_reader(FsReader)
    }

    pub fn with_reader(reader: impl ArtifactReader + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<ModelHandle> {
        let path = path.as_ref();
        let format = ModelFormat::from_path(path)?;

        let cell = {
            let mut cache = self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            cache.entry(path.to_path_buf()).or_default().clone()
        };

        if let Some(model) = cell.get() {
            debug!("Model cache hit for {}", path.display());
            return Ok(model.clone());
        }

        cell.get_or_try_init(|| self.load_uncached(path, format))
            .map(|model| model.clone())
            .map_err(|e| {
                warn!("❌ Could not load model from {}: {}", path.display(), e);
                e
            })
    }

    /// Returns the cached model for `path` without touching the reader.
    pub fn cached(&self, path: impl AsRef<Path>) -> Option<ModelHandle> {
        let cache = self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        cache.get(path.as_ref()).and_then(|cell| cell.get().cloned())
    }

    fn load_uncached(&self, path: &Path, format: ModelFormat) -> Result<ModelHandle> {
        let bytes = self.reader.read(path)?;
        let artifact = ModelArtifact::decode(format, &bytes)?;
        let model = create_model(artifact)?;
        info!("🧠 Loaded {} model from {} ({} format)", model.name(), path.display(), format);
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;
    use ts_core::ErrorKind;

    struct CountingReader {
        inner: FsReader,
        reads: Arc<AtomicUsize>,
        delay: Duration,
    }

    impl CountingReader {
        fn new(reads: Arc<AtomicUsize>) -> Self {
            Self { inner: FsReader, reads, delay: Duration::ZERO }
        }
    }

    impl ArtifactReader for CountingReader {
        fn read(&self, path: &Path) -> Result<Vec<u8>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            thread::sleep(self.delay);
            self.inner.read(path)
        }
    }

    fn write_artifact(dir: &Path, name: &str, artifact: &ModelArtifact) -> PathBuf {
        let path = dir.join(name);
        let bytes = serde_pickle::to_vec(artifact, serde_pickle::SerOptions::new()).unwrap();
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_load_pickle_and_joblib() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ModelLoader::new();

        let pkl = write_artifact(dir.path(), "model.pkl", &ModelArtifact::LeadWords { words: 3 });
        assert_eq!(loader.load(&pkl).unwrap().name(), "lead_words");

        let joblib = write_artifact(dir.path(), "model.joblib", &ModelArtifact::LeadSentences { sentences: 1 });
        assert_eq!(loader.load(&joblib).unwrap().name(), "lead_sentences");
    }

    #[test]
    fn test_load_is_cached_per_path() {
        let dir = tempfile::tempdir().unwrap();
        let reads = Arc::new(AtomicUsize::new(0));
        let loader = ModelLoader::with_reader(CountingReader::new(reads.clone()));

        let first = write_artifact(dir.path(), "a.pkl", &ModelArtifact::LeadWords { words: 3 });
        let a1 = loader.load(&first).unwrap();
        let a2 = loader.load(&first).unwrap();
        assert!(Arc::ptr_eq(&a1, &a2));
        assert_eq!(reads.load(Ordering::SeqCst), 1);

        let second = write_artifact(dir.path(), "b.pkl", &ModelArtifact::LeadWords { words: 3 });
        let b = loader.load(&second).unwrap();
        assert!(!Arc::ptr_eq(&a1, &b));
        assert_eq!(reads.load(Ordering::SeqCst), 2);

        assert!(loader.cached(&first).is_some());
        assert!(loader.cached(dir.path().join("c.pkl")).is_none());
    }

    #[test]
    fn test_concurrent_first_load_reads_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(dir.path(), "model.pkl", &ModelArtifact::LeadWords { words: 3 });
        let reads = Arc::new(AtomicUsize::new(0));
        let loader = Arc::new(ModelLoader::with_reader(CountingReader {
            inner: FsReader,
            reads: reads.clone(),
            delay: Duration::from_millis(50),
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let loader = loader.clone();
                let path = path.clone();
                thread::spawn(move || loader.load(&path).unwrap())
            })
            .collect();
        let models: Vec<ModelHandle> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(reads.load(Ordering::SeqCst), 1);
        assert!(models.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModelLoader::new().load(dir.path().join("missing.pkl")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }

    #[test]
    fn test_unsupported_extension_skips_the_reader() {
        let reads = Arc::new(AtomicUsize::new(0));
        let loader = ModelLoader::with_reader(CountingReader::new(reads.clone()));
        let err = loader.load("model.xyz").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
        assert_eq!(reads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_corrupt_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.joblib");
        std::fs::write(&path, b"\x78\x9cgarbage").unwrap();
        let err = ModelLoader::new().load(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialization);
    }

    #[test]
    fn test_failed_load_is_retried() {
        let dir = tempfile::tempdir().unwrap();
        let reads = Arc::new(AtomicUsize::new(0));
        let loader = ModelLoader::with_reader(CountingReader::new(reads.clone()));
        let path = dir.path().join("late.pkl");

        assert_eq!(loader.load(&path).unwrap_err().kind(), ErrorKind::FileNotFound);
        assert!(loader.cached(&path).is_none());

        write_artifact(dir.path(), "late.pkl", &ModelArtifact::LeadWords { words: 1 });
        assert!(loader.load(&path).is_ok());
        assert_eq!(reads.load(Ordering::SeqCst), 2);
    }
}

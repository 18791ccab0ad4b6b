pub mod artifact;
pub mod invoker;
pub mod loader;
pub mod models;
pub mod text;

pub use artifact::{ModelArtifact, ModelFormat};
pub use invoker::{summarize, try_summarize};
pub use loader::{ArtifactReader, FsReader, ModelHandle, ModelLoader};
pub use models::create_model;

pub mod prelude {
    pub use super::loader::{ModelHandle, ModelLoader};
    pub use super::invoker::summarize;
    pub use ts_core::{Error, Result, Statistics, SummarizationModel};
}

pub mod error;
pub mod models;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use models::SummarizationModel;
pub use types::{word_count, Statistics};

pub mod prelude {
    pub use crate::{Error, ErrorKind, Result, Statistics, SummarizationModel};
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported model format: {} (expected .pkl or .joblib)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Model file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to load model: {0}")]
    Deserialization(String),

    #[error("Please enter some text before summarizing.")]
    EmptyInput,

    #[error("Summarization failed: {0}")]
    Invocation(String),

    #[error("The model is not loaded. Please check the model path.")]
    ModelUnavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Stable discriminant of [`Error`], used where the payload does not matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedFormat,
    FileNotFound,
    Deserialization,
    EmptyInput,
    Invocation,
    ModelUnavailable,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Error::FileNotFound(_) => ErrorKind::FileNotFound,
            Error::Deserialization(_) => ErrorKind::Deserialization,
            Error::EmptyInput => ErrorKind::EmptyInput,
            Error::Invocation(_) => ErrorKind::Invocation,
            Error::ModelUnavailable => ErrorKind::ModelUnavailable,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

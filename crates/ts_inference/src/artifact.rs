//! On-disk model artifacts.
//!
//! A `.pkl` file is a plain pickle stream. A `.joblib` file is a pickle
//! stream that joblib may have zlib-compressed; compressed payloads are
//! inflated before unpickling.

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use flate2::read::ZlibDecoder;
use serde::{Deserialize, Serialize};
use ts_core::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Pickle,
    Joblib,
}

impl ModelFormat {
    /// Picks the format from the file suffix. The match is case-sensitive.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("pkl") => Ok(Self::Pickle),
            Some("joblib") => Ok(Self::Joblib),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pickle => write!(f, "pickle"),
            Self::Joblib => write!(f, "joblib"),
        }
    }
}

/// Description of a model as stored in the artifact, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LeadWords {
        #[serde(default = "default_words")]
        words: usize,
    },
    LeadSentences {
        #[serde(default = "default_sentences")]
        sentences: usize,
    },
    WordFrequency {
        #[serde(default = "default_sentences")]
        sentences: usize,
        #[serde(default)]
        stopwords: Vec<String>,
    },
    Tfidf {
        #[serde(default = "default_sentences")]
        sentences: usize,
        idf: HashMap<String, f64>,
        #[serde(default = "default_idf")]
        default_idf: f64,
    },
}

fn default_words() -> usize {
    20
}

fn default_sentences() -> usize {
    3
}

fn default_idf() -> f64 {
    1.0
}

impl ModelArtifact {
    pub fn decode(format: ModelFormat, bytes: &[u8]) -> Result<Self> {
        match format {
            ModelFormat::Pickle => unpickle(bytes),
            ModelFormat::Joblib => {
                if is_zlib(bytes) {
                    let mut inflated = Vec::new();
                    ZlibDecoder::new(bytes)
                        .read_to_end(&mut inflated)
                        .map_err(|e| Error::Deserialization(format!("corrupt joblib stream: {}", e)))?;
                    unpickle(&inflated)
                } else {
                    unpickle(bytes)
                }
            }
        }
    }
}

fn unpickle(bytes: &[u8]) -> Result<ModelArtifact> {
    serde_pickle::from_slice(bytes, serde_pickle::DeOptions::new())
        .map_err(|e| Error::Deserialization(e.to_string()))
}

// RFC 1950 header: CM = 8 and the CMF/FLG pair is a multiple of 31.
fn is_zlib(bytes: &[u8]) -> bool {
    match bytes {
        [cmf, flg, ..] => cmf & 0x0f == 8 && (u16::from(*cmf) << 8 | u16::from(*flg)) % 31 == 0,
        _ => false,
    }
}

use std::sync::Arc;

use ts_core::{Result, SummarizationModel};
use crate::artifact::ModelArtifact;

pub mod frequency;
pub mod lead;
pub mod tfidf;

pub use frequency::WordFrequencyModel;
pub use lead::{LeadSentencesModel, LeadWordsModel};
pub use tfidf::TfIdfModel;

/// Builds the adapter for a decoded artifact.
pub fn create_model(artifact: ModelArtifact) -> Result<Arc<dyn SummarizationModel>> {
    let model: Arc<dyn SummarizationModel> = match artifact {
        ModelArtifact::LeadWords { words } => Arc::new(LeadWordsModel::new(words)?),
        ModelArtifact::LeadSentences { sentences } => Arc::new(LeadSentencesModel::new(sentences)?),
        ModelArtifact::WordFrequency { sentences, stopwords } => {
            Arc::new(WordFrequencyModel::new(sentences, stopwords)?)
        }
        ModelArtifact::Tfidf { sentences, idf, default_idf } => {
            Arc::new(TfIdfModel::new(sentences, idf, default_idf)?)
        }
    };
    Ok(model)
}

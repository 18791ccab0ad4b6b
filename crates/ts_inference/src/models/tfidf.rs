use std::collections::HashMap;
use std::fmt;

use ts_core::{Error, Result, SummarizationModel};
use crate::text::{select_top, split_sentences, terms};

/// Extractive summarizer ranking sentences by mean tf-idf weight.
pub struct TfIdfModel {
    sentences: usize,
    idf: HashMap<String, f64>,
    default_idf: f64,
}

impl fmt::Debug for TfIdfModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TfIdfModel")
            .field("sentences", &self.sentences)
            .field("vocabulary", &self.idf.len())
            .field("default_idf", &self.default_idf)
            .finish()
    }
}

impl TfIdfModel {
    pub fn new(sentences: usize, idf: HashMap<String, f64>, default_idf: f64) -> Result<Self> {
        if sentences == 0 {
            return Err(Error::Deserialization("tfidf needs at least one sentence".to_string()));
        }
        if !default_idf.is_finite() || idf.values().any(|w| !w.is_finite()) {
            return Err(Error::Deserialization("tfidf weights must be finite".to_string()));
        }
        Ok(Self {
            sentences,
            idf: idf.into_iter().map(|(term, weight)| (term.to_lowercase(), weight)).collect(),
            default_idf,
        })
    }

    fn score(&self, sentence: &str) -> f64 {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for term in terms(sentence) {
            *counts.entry(term).or_insert(0) += 1;
        }
        let total: usize = counts.values().sum();
        if total == 0 {
            return 0.0;
        }

        let weighted: f64 = counts
            .iter()
            .map(|(term, &count)| count as f64 * self.idf.get(term).copied().unwrap_or(self.default_idf))
            .sum();
        weighted / total as f64
    }

    fn summarize(&self, text: &str) -> String {
        let sentences = split_sentences(text);
        let scores: Vec<f64> = sentences.iter().map(|s| self.score(s)).collect();
        select_top(&sentences, &scores, self.sentences)
    }
}

impl SummarizationModel for TfIdfModel {
    fn name(&self) -> &str {
        "tfidf"
    }

    fn predict(&self, inputs: &[String]) -> Result<Vec<String>> {
        Ok(inputs.iter().map(|text| self.summarize(text)).collect())
    }
}

use std::collections::{HashMap, HashSet};

use ts_core::{Error, Result, SummarizationModel};
use crate::text::{select_top, split_sentences, terms};

/// Extractive summarizer ranking sentences by normalized term frequency.
#[derive(Debug)]
pub struct WordFrequencyModel {
    sentences: usize,
    stopwords: HashSet<String>,
}

impl WordFrequencyModel {
    pub fn new(sentences: usize, stopwords: Vec<String>) -> Result<Self> {
        if sentences == 0 {
            return Err(Error::Deserialization("word_frequency needs at least one sentence".to_string()));
        }
        Ok(Self {
            sentences,
            stopwords: stopwords.into_iter().map(|w| w.to_lowercase()).collect(),
        })
    }

    fn summarize(&self, text: &str) -> String {
        let sentences = split_sentences(text);

        let mut frequencies: HashMap<String, f64> = HashMap::new();
        for term in terms(text).filter(|t| !self.stopwords.contains(t)) {
            *frequencies.entry(term).or_insert(0.0) += 1.0;
        }
        let max = frequencies.values().copied().fold(0.0, f64::max);
        if max > 0.0 {
            frequencies.values_mut().for_each(|f| *f /= max);
        }

        let scores: Vec<f64> = sentences
            .iter()
            .map(|sentence| terms(sentence).filter_map(|t| frequencies.get(&t)).sum())
            .collect();

        select_top(&sentences, &scores, self.sentences)
    }
}

impl SummarizationModel for WordFrequencyModel {
    fn name(&self) -> &str {
        "word_frequency"
    }

    fn predict(&self, inputs: &[String]) -> Result<Vec<String>> {
        Ok(inputs.iter().map(|text| self.summarize(text)).collect())
    }
}

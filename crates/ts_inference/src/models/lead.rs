use ts_core::{Error, Result, SummarizationModel};
use crate::text::split_sentences;

/// Keeps the first `words` whitespace-delimited tokens.
#[derive(Debug)]
pub struct LeadWordsModel {
    words: usize,
}

impl LeadWordsModel {
    pub fn new(words: usize) -> Result<Self> {
        if words == 0 {
            return Err(Error::Deserialization("lead_words needs at least one word".to_string()));
        }
        Ok(Self { words })
    }
}

impl SummarizationModel for LeadWordsModel {
    fn name(&self) -> &str {
        "lead_words"
    }

    fn predict(&self, inputs: &[String]) -> Result<Vec<String>> {
        Ok(inputs.iter().map(|text| {
            let words: Vec<&str> = text.split_whitespace().take(self.words).collect();
            words.join(" ")
        }).collect())
    }
}

/// Keeps the first `sentences` sentences.
#[derive(Debug)]
pub struct LeadSentencesModel {
    sentences: usize,
}

impl LeadSentencesModel {
    pub fn new(sentences: usize) -> Result<Self> {
        if sentences == 0 {
            return Err(Error::Deserialization("lead_sentences needs at least one sentence".to_string()));
        }
        Ok(Self { sentences })
    }
}

impl SummarizationModel for LeadSentencesModel {
    fn name(&self) -> &str {
        "lead_sentences"
    }

    fn predict(&self, inputs: &[String]) -> Result<Vec<String>> {
        Ok(inputs.iter().map(|text| {
            let sentences: Vec<&str> = split_sentences(text).into_iter().take(self.sentences).collect();
            let summary = sentences.join(" ");
            tracing::debug!("Generated lead summary: {}", summary);
            summary
        }).collect())
    }
}

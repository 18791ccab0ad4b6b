use serde::{Deserialize, Serialize};

/// Word counts shown next to a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub original_words: usize,
    pub summary_words: usize,
}

impl Statistics {
    pub fn new(original: &str, summary: &str) -> Self {
        Self {
            original_words: word_count(original),
            summary_words: word_count(summary),
        }
    }
}

/// Number of whitespace-delimited tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

//! What happens when the user presses the summarize button.

use tracing::{debug, warn};
use ts_core::{Error, Result, Statistics};
use ts_inference::{summarize, ModelHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Form shown, nothing submitted yet.
    Idle,
    /// Blank submission; the model was not called.
    Warning(String),
    /// No model is loaded; the model was not called.
    Unavailable(String),
    Summary { summary: String, stats: Statistics },
}

/// Validates `text`, then runs the model on the blocking pool.
pub async fn process(model: &Result<ModelHandle>, text: &str) -> Outcome {
    if text.trim().is_empty() {
        warn!("Ignoring empty submission");
        return Outcome::Warning(Error::EmptyInput.to_string());
    }

    let model = match model {
        Ok(model) => model.clone(),
        Err(e) => {
            warn!("Submission rejected, model unavailable: {}", e);
            return Outcome::Unavailable(Error::ModelUnavailable.to_string());
        }
    };

    let input = text.to_string();
    let summary = match tokio::task::spawn_blocking(move || summarize(model.as_ref(), &input)).await {
        Ok(summary) => summary,
        Err(e) => Error::Invocation(e.to_string()).to_string(),
    };

    let stats = Statistics::new(text, &summary);
    debug!("Summarized {} words into {}", stats.original_words, stats.summary_words);
    Outcome::Summary { summary, stats }
}

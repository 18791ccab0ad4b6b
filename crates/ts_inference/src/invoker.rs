use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};
use ts_core::{Error, Result, SummarizationModel};

/// Summarizes `text`, turning any failure into a readable message.
///
/// Never panics and never returns an error; callers display the string as is.
pub fn summarize(model: &dyn SummarizationModel, text: &str) -> String {
    match try_summarize(model, text) {
        Ok(summary) => summary,
        Err(e) => {
            warn!("⚠️ {} model failed: {}", model.name(), e);
            e.to_string()
        }
    }
}

/// Calls `model.predict([text])` and takes the first output.
pub fn try_summarize(model: &dyn SummarizationModel, text: &str) -> Result<String> {
    debug!("Invoking {} model on {} bytes", model.name(), text.len());
    let inputs = vec![text.to_string()];

    let outputs = panic::catch_unwind(AssertUnwindSafe(|| model.predict(&inputs)))
        .map_err(|payload| Error::Invocation(panic_message(payload.as_ref())))?
        .map_err(|e| match e {
            Error::Invocation(_) => e,
            other => Error::Invocation(other.to_string()),
        })?;

    outputs
        .into_iter()
        .next()
        .ok_or_else(|| Error::Invocation("model returned no output".to_string()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("model panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("model panicked: {}", message)
    } else {
        "model panicked".to_string()
    }
}

use std::fmt;
use crate::Result;

/// The single capability the application needs from a loaded model.
///
/// Follows the list-in, list-out convention: one output per input, so a
/// single text is summarized as `predict(&[text])[0]`. Models whose native
/// entry point is a direct call or a `summarize` method get an adapter that
/// implements this trait.
pub trait SummarizationModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    fn predict(&self, inputs: &[String]) -> Result<Vec<String>>;
}

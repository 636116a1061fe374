use fontinject_css::CssParseError;
use fontinject_traits::ResolveError;
use thiserror::Error;

/// Errors that abort a stylesheet transform. No partial output is produced.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Stylesheet parsing failed: {0}")]
    Parse(#[from] CssParseError),

    #[error("Font family resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Resolution task did not complete: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for TransformError {
    fn from(e: tokio::task::JoinError) -> Self {
        TransformError::Task(e.to_string())
    }
}

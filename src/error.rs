use fontinject_transform::TransformError;
use thiserror::Error;

/// Top-level error for the plugin, configuration loading and the CLI.
#[derive(Error, Debug)]
pub enum InjectionError {
    #[error("Transform failed: {0}")]
    Transform(#[from] TransformError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

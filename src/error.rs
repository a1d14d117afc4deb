use thiserror::Error;

/// Custom Result type for this crate.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// The Error type for pipeline operations.
///
/// Every variant is caught at the `ProcessingPipeline::run` boundary and
/// converted into `ProcessingResult::Failed`; nothing here escapes to the
/// caller as an error. The `invalid id`, `document not found` and
/// `file too large` display strings are the documented reason literals;
/// the rest are descriptive but not contractual.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration validation error: {0}")]
    ConfigValidationError(String),

    #[error("invalid id")]
    InvalidInput,

    #[error("document not found")]
    NotFound,

    #[error("remote content source unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("failed to decode document payload: {source}")]
    DecodeError {
        #[from]
        source: serde_json::Error,
    },

    #[error("file too large")]
    TooLarge,

    #[error("processor '{processor}' failed: {cause}")]
    ProcessingFailed {
        processor: &'static str,
        cause: String,
    },

    #[error("status update failed after processing: {0}")]
    StatusCommitFailed(String),

    #[error("document store error: {0}")]
    StoreError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

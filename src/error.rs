use thiserror::Error;

/// Application error type
///
/// Classified per subsystem; orchestration code that does not care about the
/// class wraps these in `anyhow`.
#[derive(Debug, Error)]
pub enum AppError {
    /// No credentials at all, not even from the environment
    #[error("no API keys available, add keys in settings")]
    NoApiKeys,

    /// Every key in the rotation failed
    #[error("all {tried} API keys failed, last error: {last}")]
    AllKeysFailed { tried: usize, last: String },

    /// The model answered but the completion carried no content
    #[error("model returned empty content (model: {model})")]
    EmptyCompletion { model: String },

    /// Model output could not be parsed as JSON after cleanup
    #[error("failed to parse model response as JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Remote document store request failed
    #[error("content store request failed (key: {key}): {source}")]
    Store {
        key: String,
        #[source]
        source: reqwest::Error,
    },

    /// Settings file could not be read or parsed
    #[error("settings error ({path}): {message}")]
    Settings { path: String, message: String },

    /// Bulk generation produced nothing across all batches
    #[error("generation failed for all batches, last error: {last}")]
    AllBatchesFailed { last: String },

    /// File IO
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate result type
pub type Result<T> = std::result::Result<T, AppError>;

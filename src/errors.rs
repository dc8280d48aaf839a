use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Invalid input: {0}")]
    ValidationError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to access language model API: {0}")]
    LlmError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Summarization was cancelled")]
    Cancelled,
}

impl SummaryError {
    /// True when the failure happened before any external call was made.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, SummaryError::ValidationError(_))
    }
}

impl From<reqwest::Error> for SummaryError {
    fn from(error: reqwest::Error) -> Self {
        SummaryError::HttpError(error.to_string())
    }
}

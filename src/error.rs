//! Error types for the bartender agent.

use thiserror::Error;

/// Errors that can occur while answering a drink question.
#[derive(Debug, Error)]
pub enum BartenderError {
    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// The recipe API answered with a non-success status.
    #[error("Recipe API returned status: {0}")]
    RecipeApiStatus(u16),

    /// The chat completion API answered with a non-success status.
    #[error("Chat API returned status: {0}")]
    ChatApiStatus(u16),

    /// A recipe record lacks a field required for formatting.
    #[error("Recipe record is missing field: {0}")]
    MissingField(&'static str),

    /// The chat completion API returned no usable choice.
    #[error("Chat API returned no completion")]
    EmptyCompletion,

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Regex error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl BartenderError {
    /// Check if this error came from an outbound service rather than local logic.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::HttpRequest(_)
                | Self::RecipeApiStatus(_)
                | Self::ChatApiStatus(_)
                | Self::EmptyCompletion
        )
    }
}

/// Convenience result alias for bartender operations.
pub type BartenderResult<T> = Result<T, BartenderError>;

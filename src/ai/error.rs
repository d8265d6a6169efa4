//! AI-specific error handling.

use thiserror::Error;

/// AI API specific errors.
#[derive(Error, Debug)]
pub enum AiError {
    /// API key not configured for the selected provider.
    #[error("{provider} API key not found. Set the {env_var} environment variable")]
    ApiKeyMissing {
        /// Provider display name.
        provider: &'static str,
        /// Environment variable the key is read from.
        env_var: &'static str,
    },

    /// API request failed with error message.
    #[error("AI API request failed: {0}")]
    ApiRequestFailed(String),

    /// Invalid response format from the AI API.
    #[error("Invalid response format from AI API: {0}")]
    InvalidResponseFormat(String),

    /// Network connectivity error.
    #[error("Network error: {0}")]
    NetworkError(String),
}

// Note: anyhow already has a blanket impl for thiserror::Error types

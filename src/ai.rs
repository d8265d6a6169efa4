//! AI provider integration for report summaries.

pub mod error;
pub mod gemini;
pub mod openai;
pub mod prompts;
pub mod summarizer;

pub use error::AiError;
pub use gemini::GeminiClient;
pub use openai::OpenAiClient;
pub use summarizer::{Summarizer, NO_COMMITS_MESSAGE};

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;

/// Metadata about an AI client implementation.
#[derive(Clone, Debug)]
pub struct AiClientMetadata {
    /// Service provider name.
    pub provider: String,
    /// Model identifier.
    pub model: String,
}

/// Trait for AI service clients.
pub trait AiClient: Send + Sync {
    /// Sends a request to the AI service and returns the raw response text.
    fn send_request<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

    /// Returns metadata about the AI client implementation.
    fn get_metadata(&self) -> AiClientMetadata;
}

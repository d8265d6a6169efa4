//! OpenAI chat completions API client.

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ai::{error::AiError, AiClient, AiClientMetadata};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// OpenAI API request message
#[derive(Serialize, Debug)]
struct Message {
    role: String,
    content: String,
}

/// OpenAI API request body
#[derive(Serialize, Debug)]
struct OpenAiRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
}

/// OpenAI API response choice
#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
}

/// OpenAI API response message
#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: String,
}

/// OpenAI API response
#[derive(Deserialize, Debug)]
struct OpenAiResponse {
    choices: Vec<Choice>,
}

/// OpenAI chat completions client.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    /// Create a new OpenAI client against the public API.
    pub fn new(model: String, api_key: String) -> Self {
        Self::with_base_url(model, api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL (used by tests).
    pub fn with_base_url(model: String, api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    /// Build the full API URL.
    fn api_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/v1/chat/completions")
    }
}

impl AiClient for OpenAiClient {
    fn send_request<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let mut messages = Vec::new();
            if !system_prompt.is_empty() {
                messages.push(Message {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                });
            }
            messages.push(Message {
                role: "user".to_string(),
                content: user_prompt.to_string(),
            });

            let request = OpenAiRequest {
                model: self.model.clone(),
                messages,
                stream: false,
            };

            let api_url = self.api_url();
            info!(url = %api_url, model = %self.model, "Sending request to OpenAI API");

            let response = self
                .client
                .post(&api_url)
                .header("Content-Type", "application/json")
                .header("Authorization", format!("Bearer {}", self.api_key))
                .json(&request)
                .send()
                .await
                .map_err(|e| AiError::NetworkError(e.to_string()))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                return Err(
                    AiError::ApiRequestFailed(format!("HTTP {status}: {error_text}")).into(),
                );
            }

            let openai_response: OpenAiResponse = response
                .json()
                .await
                .map_err(|e| AiError::InvalidResponseFormat(e.to_string()))?;

            debug!(
                choice_count = openai_response.choices.len(),
                "Received OpenAI API response"
            );

            openai_response
                .choices
                .first()
                .map(|choice| choice.message.content.clone())
                .ok_or_else(|| {
                    AiError::InvalidResponseFormat("No choices in response".to_string()).into()
                })
        })
    }

    fn get_metadata(&self) -> AiClientMetadata {
        AiClientMetadata {
            provider: "OpenAI".to_string(),
            model: self.model.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_appends_endpoint() {
        let client = OpenAiClient::new("gpt-4o-mini".to_string(), "sk-test".to_string());
        assert_eq!(client.api_url(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn api_url_handles_trailing_slash() {
        let client = OpenAiClient::with_base_url(
            "gpt-4o-mini".to_string(),
            "sk-test".to_string(),
            "http://localhost:8080/".to_string(),
        );
        assert_eq!(client.api_url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn metadata_reports_provider_and_model() {
        let client = OpenAiClient::new("gpt-4o-mini".to_string(), "sk-test".to_string());
        let metadata = client.get_metadata();
        assert_eq!(metadata.provider, "OpenAI");
        assert_eq!(metadata.model, "gpt-4o-mini");
    }
}

//! Google Gemini generateContent API client.

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ai::{error::AiError, AiClient, AiClientMetadata};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// A piece of content text.
#[derive(Serialize, Deserialize, Debug)]
struct Part {
    text: String,
}

/// Request/response content block.
#[derive(Serialize, Deserialize, Debug)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

/// Gemini API request body
#[derive(Serialize, Debug)]
struct GeminiRequest {
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
}

/// Gemini API response candidate
#[derive(Deserialize, Debug)]
struct Candidate {
    content: Content,
}

/// Gemini API response
#[derive(Deserialize, Debug)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

/// Gemini generateContent client.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client against the public API.
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
        format!("{base}/v1beta/models/{}:generateContent", self.model)
    }
}

impl AiClient for GeminiClient {
    fn send_request<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let system_instruction = if system_prompt.is_empty() {
                None
            } else {
                Some(Content {
                    role: None,
                    parts: vec![Part {
                        text: system_prompt.to_string(),
                    }],
                })
            };

            let request = GeminiRequest {
                system_instruction,
                contents: vec![Content {
                    role: Some("user".to_string()),
                    parts: vec![Part {
                        text: user_prompt.to_string(),
                    }],
                }],
            };

            let api_url = self.api_url();
            info!(url = %api_url, model = %self.model, "Sending request to Gemini API");

            // Key goes in a header so it never shows up in URLs or logs
            let response = self
                .client
                .post(&api_url)
                .header("Content-Type", "application/json")
                .header("x-goog-api-key", &self.api_key)
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

            let gemini_response: GeminiResponse = response
                .json()
                .await
                .map_err(|e| AiError::InvalidResponseFormat(e.to_string()))?;

            debug!(
                candidate_count = gemini_response.candidates.len(),
                "Received Gemini API response"
            );

            let text = gemini_response
                .candidates
                .first()
                .map(|candidate| {
                    candidate
                        .content
                        .parts
                        .iter()
                        .map(|part| part.text.as_str())
                        .collect::<Vec<_>>()
                        .join("")
                })
                .filter(|text| !text.is_empty())
                .ok_or_else(|| {
                    AiError::InvalidResponseFormat("No candidates in response".to_string())
                })?;

            Ok(text)
        })
    }

    fn get_metadata(&self) -> AiClientMetadata {
        AiClientMetadata {
            provider: "Gemini".to_string(),
            model: self.model.clone(),
        }
    }
}

//! Provider selection and the summarization entry point.

use anyhow::Result;
use tracing::info;

use crate::ai::{
    error::AiError, gemini::GeminiClient, openai::OpenAiClient, prompts, AiClient,
};
use crate::config::{Config, ProviderKind, GEMINI_API_KEY_VAR, OPENAI_API_KEY_VAR};
use crate::git::CommitRecord;
use crate::report::Period;

/// Canned summary used when the window contains no commits.
pub const NO_COMMITS_MESSAGE: &str = "No commits found in this period.";

/// AI summarizer backed by the configured provider.
pub enum Summarizer {
    /// OpenAI chat completions.
    OpenAi(OpenAiClient),
    /// Google Gemini generateContent.
    Gemini(GeminiClient),
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenAi(_) => f.write_str("Summarizer::OpenAi(..)"),
            Self::Gemini(_) => f.write_str("Summarizer::Gemini(..)"),
        }
    }
}

impl Summarizer {
    /// Build a summarizer from configuration.
    ///
    /// Errors when the selected provider has no API key configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.ai_provider {
            ProviderKind::OpenAi => {
                let api_key = config.openai_api_key.clone().ok_or(AiError::ApiKeyMissing {
                    provider: "OpenAI",
                    env_var: OPENAI_API_KEY_VAR,
                })?;
                Ok(Self::OpenAi(OpenAiClient::new(
                    config.openai_model.clone(),
                    api_key,
                )))
            }
            ProviderKind::Gemini => {
                let api_key = config.gemini_api_key.clone().ok_or(AiError::ApiKeyMissing {
                    provider: "Gemini",
                    env_var: GEMINI_API_KEY_VAR,
                })?;
                Ok(Self::Gemini(GeminiClient::new(
                    config.gemini_model.clone(),
                    api_key,
                )))
            }
        }
    }

    fn client(&self) -> &dyn AiClient {
        match self {
            Summarizer::OpenAi(client) => client,
            Summarizer::Gemini(client) => client,
        }
    }

    /// Summarize a commit list into a period work report.
    ///
    /// An empty commit list short-circuits to [`NO_COMMITS_MESSAGE`] without
    /// calling the provider.
    pub async fn summarize(&self, commits: &[CommitRecord], period: Period) -> Result<String> {
        if commits.is_empty() {
            return Ok(NO_COMMITS_MESSAGE.to_string());
        }

        let metadata = self.client().get_metadata();
        info!(
            provider = %metadata.provider,
            model = %metadata.model,
            commit_count = commits.len(),
            "Requesting report summary"
        );

        let system_prompt = prompts::system_prompt(period);
        let user_prompt = prompts::user_prompt(commits, period);

        self.client().send_request(&system_prompt, &user_prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_openai_key_errors() {
        let config = Config {
            ai_provider: ProviderKind::OpenAi,
            openai_api_key: None,
            ..Config::default()
        };
        let err = Summarizer::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn missing_gemini_key_errors() {
        let config = Config {
            ai_provider: ProviderKind::Gemini,
            gemini_api_key: None,
            ..Config::default()
        };
        let err = Summarizer::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn empty_commit_list_short_circuits() {
        let config = Config {
            openai_api_key: Some("sk-test".to_string()),
            ..Config::default()
        };
        let summarizer = Summarizer::from_config(&config).unwrap();
        // No HTTP server is running; this only passes because no request is made
        let summary = summarizer.summarize(&[], Period::Weekly).await.unwrap();
        assert_eq!(summary, NO_COMMITS_MESSAGE);
    }

    #[test]
    fn provider_selection_follows_config() {
        let config = Config {
            ai_provider: ProviderKind::Gemini,
            gemini_api_key: Some("gm-test".to_string()),
            ..Config::default()
        };
        let summarizer = Summarizer::from_config(&config).unwrap();
        assert!(matches!(summarizer, Summarizer::Gemini(_)));
    }
}

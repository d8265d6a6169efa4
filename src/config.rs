//! Configuration management for git-reporter.
//!
//! Configuration lives in a YAML file (discovered in the working directory or
//! under `~/.git-reporter/`). API keys are overlaid from environment variables
//! at load time and are never written back to the file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::report::Period;

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Supported AI providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI chat completions API.
    #[default]
    #[value(name = "openai")]
    OpenAi,
    /// Google Gemini generateContent API.
    Gemini,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::Gemini => write!(f, "gemini"),
        }
    }
}

/// Configuration for a single repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryEntry {
    /// Repository name used in reports and CLI selection.
    pub name: String,

    /// Local path to the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Remote repository URL (cloned to a temporary directory).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// Only include commits authored with this email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
}

impl RepositoryEntry {
    /// Returns the repository location (local path or remote URL).
    ///
    /// Errors when neither is configured.
    pub fn location(&self) -> Result<&str> {
        self.path
            .as_deref()
            .or(self.repo.as_deref())
            .with_context(|| {
                format!(
                    "Repository '{}' must have either 'path' or 'repo' specified",
                    self.name
                )
            })
    }

    /// Whether this entry points at a remote URL rather than a local path.
    pub fn is_remote(&self) -> bool {
        self.path.is_none() && self.repo.is_some()
    }
}

/// Main configuration for git-reporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Repositories to analyze.
    #[serde(default, alias = "repositories")]
    pub repos: Vec<RepositoryEntry>,

    /// AI provider to use.
    #[serde(default)]
    pub ai_provider: ProviderKind,

    /// OpenAI API key (sourced from the environment, never persisted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,

    /// OpenAI model to use.
    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    /// Gemini API key (sourced from the environment, never persisted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,

    /// Gemini model to use.
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Default report period when `generate` is run without `--period`.
    #[serde(default = "default_period")]
    pub default_period: Period,
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

fn default_period() -> Period {
    Period::Weekly
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repos: Vec::new(),
            ai_provider: ProviderKind::OpenAi,
            openai_api_key: None,
            openai_model: default_openai_model(),
            gemini_api_key: None,
            gemini_model: default_gemini_model(),
            default_period: default_period(),
        }
    }
}

/// Manages configuration loading and saving.
pub struct ConfigManager {
    config_path: PathBuf,
}

/// Config file names probed in the working directory before falling back to
/// the home-directory default.
const LOCAL_CONFIG_NAMES: &[&str] = &[
    "git-reporter.yaml",
    "git-reporter.yml",
    ".git-reporter.yaml",
    ".git-reporter.yml",
];

impl ConfigManager {
    /// Create a configuration manager, discovering the config path when no
    /// explicit path is given.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        let config_path = config_path.unwrap_or_else(Self::discover_config_path);
        Self { config_path }
    }

    /// Create a configuration manager with an explicit config path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// The path this manager reads from and writes to.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Probe the working directory for a local config file, falling back to
    /// the default path under the home directory.
    fn discover_config_path() -> PathBuf {
        for name in LOCAL_CONFIG_NAMES {
            let candidate = PathBuf::from(name);
            if candidate.exists() {
                return candidate;
            }
        }
        Self::default_config_path()
    }

    /// The default config path (`~/.git-reporter/config.yaml`).
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".git-reporter")
            .join("config.yaml")
    }

    /// Load configuration from file, overlaying API keys from the
    /// environment for any key absent from the file.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            anyhow::bail!(
                "Configuration file not found: {}\nRun 'git-reporter init' to create one.",
                self.config_path.display()
            );
        }

        let content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file: {}", self.config_path.display()))?;

        let mut config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid configuration: {}", self.config_path.display()))?;

        if config.openai_api_key.is_none() {
            config.openai_api_key = env::var(OPENAI_API_KEY_VAR).ok();
        }
        if config.gemini_api_key.is_none() {
            config.gemini_api_key = env::var(GEMINI_API_KEY_VAR).ok();
        }

        Ok(config)
    }

    /// Save configuration to file. API keys are stripped before writing so
    /// they only ever live in the environment.
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
        }

        let mut sanitized = config.clone();
        sanitized.openai_api_key = None;
        sanitized.gemini_api_key = None;

        let content =
            serde_yaml::to_string(&sanitized).context("Failed to serialize configuration")?;

        fs::write(&self.config_path, content).with_context(|| {
            format!("Failed to write config file: {}", self.config_path.display())
        })?;

        Ok(())
    }

    /// Create and save a default configuration.
    pub fn create_default(&self) -> Result<Config> {
        let config = Config::default();
        self.save(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert!(config.repos.is_empty());
        assert_eq!(config.ai_provider, ProviderKind::OpenAi);
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.gemini_model, "gemini-2.0-flash-exp");
        assert_eq!(config.default_period, Period::Weekly);
    }

    #[test]
    fn load_missing_file_fails() {
        let temp_dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("config.yaml"));
        let err = manager.load().unwrap_err();
        assert!(err.to_string().contains("git-reporter init"));
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("config.yaml"));

        let mut config = Config::default();
        config.repos.push(RepositoryEntry {
            name: "backend".to_string(),
            path: Some("/tmp/backend".to_string()),
            repo: None,
            author_email: Some("dev@example.com".to_string()),
        });
        config.ai_provider = ProviderKind::Gemini;

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.repos.len(), 1);
        assert_eq!(loaded.repos[0].name, "backend");
        assert_eq!(
            loaded.repos[0].author_email.as_deref(),
            Some("dev@example.com")
        );
        assert_eq!(loaded.ai_provider, ProviderKind::Gemini);
    }

    #[test]
    fn save_strips_api_keys() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");
        let manager = ConfigManager::with_path(path.clone());

        let config = Config {
            openai_api_key: Some("sk-secret".to_string()),
            gemini_api_key: Some("gm-secret".to_string()),
            ..Config::default()
        };
        manager.save(&config).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("sk-secret"));
        assert!(!written.contains("gm-secret"));
    }

    #[test]
    fn accepts_repositories_alias() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "repositories:\n  - name: app\n    repo: https://example.com/app.git\n",
        )
        .unwrap();

        let manager = ConfigManager::with_path(path);
        let config = manager.load().unwrap();
        assert_eq!(config.repos.len(), 1);
        assert!(config.repos[0].is_remote());
    }

    #[test]
    fn repository_entry_location() {
        let entry = RepositoryEntry {
            name: "app".to_string(),
            path: None,
            repo: None,
            author_email: None,
        };
        assert!(entry.location().is_err());

        let entry = RepositoryEntry {
            name: "app".to_string(),
            path: Some("/src/app".to_string()),
            repo: None,
            author_email: None,
        };
        assert_eq!(entry.location().unwrap(), "/src/app");
        assert!(!entry.is_remote());
    }
}

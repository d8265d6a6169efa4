//! Add-repo command — adds a repository to the configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{ConfigManager, RepositoryEntry};

/// Add-repo command options.
///
/// Specify either `--path` for a local repository or `--repo` for a remote
/// repository, never both.
#[derive(Parser)]
pub struct AddRepoCommand {
    /// Path to the configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Repository name.
    #[arg(short, long)]
    pub name: String,

    /// Local path to the repository.
    #[arg(short, long)]
    pub path: Option<String>,

    /// Remote repository URL.
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Filter commits by author email.
    #[arg(short, long)]
    pub email: Option<String>,

    /// Replace an existing repository with the same name.
    #[arg(long)]
    pub force: bool,
}

impl AddRepoCommand {
    /// Executes the add-repo command.
    pub fn execute(self) -> Result<()> {
        match (&self.path, &self.repo) {
            (None, None) => anyhow::bail!("Either --path or --repo must be specified"),
            (Some(_), Some(_)) => {
                anyhow::bail!("Cannot specify both --path and --repo. Use one or the other.")
            }
            _ => {}
        }

        let manager = ConfigManager::new(self.config);
        let mut config = manager.load()?;

        if config.repos.iter().any(|r| r.name == self.name) {
            if !self.force {
                anyhow::bail!(
                    "Repository '{}' already exists. Use --force to replace it.",
                    self.name
                );
            }
            config.repos.retain(|r| r.name != self.name);
        }

        let location = self
            .path
            .clone()
            .or_else(|| self.repo.clone())
            .unwrap_or_default();
        let location_type = if self.path.is_some() {
            "local path"
        } else {
            "remote URL"
        };

        config.repos.push(RepositoryEntry {
            name: self.name.clone(),
            path: self.path,
            repo: self.repo,
            author_email: self.email,
        });

        manager.save(&config)?;

        println!("✅ Added repository: {} ({location_type}: {location})", self.name);

        Ok(())
    }
}

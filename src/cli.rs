//! CLI interface for git-reporter.

pub mod add_repo;
pub mod generate;
pub mod init;
pub mod list_repos;

pub use add_repo::AddRepoCommand;
pub use generate::GenerateCommand;
pub use init::InitCommand;
pub use list_repos::ListReposCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// git-reporter: AI-powered git commit history analyzer and report generator
#[derive(Parser)]
#[command(name = "git-reporter")]
#[command(about = "AI-powered git commit history analyzer and report generator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Initializes the configuration file.
    Init(InitCommand),
    /// Adds a repository to the configuration.
    #[command(name = "add-repo")]
    AddRepo(AddRepoCommand),
    /// Lists configured repositories.
    #[command(name = "list-repos")]
    ListRepos(ListReposCommand),
    /// Generates a report from git commit history.
    Generate(GenerateCommand),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Init(init_cmd) => init_cmd.execute(),
            Commands::AddRepo(add_cmd) => add_cmd.execute(),
            Commands::ListRepos(list_cmd) => list_cmd.execute(),
            Commands::Generate(generate_cmd) => generate_cmd.execute().await,
        }
    }
}

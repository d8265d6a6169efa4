//! Init command — creates the configuration file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::ConfigManager;

/// Init command options.
#[derive(Parser)]
pub struct InitCommand {
    /// Path to the configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    /// Executes the init command.
    pub fn execute(self) -> Result<()> {
        let manager = ConfigManager::new(self.config);

        if manager.config_path().exists() && !self.force {
            anyhow::bail!(
                "Configuration file already exists at {}. Use --force to overwrite.",
                manager.config_path().display()
            );
        }

        manager.create_default()?;

        println!(
            "✅ Created configuration file at: {}",
            manager.config_path().display()
        );
        println!();
        println!("Next steps:");
        println!(
            "1. Add your git repositories: git-reporter add-repo --name <name> --path <path>"
        );
        println!("2. Set your AI provider API key as an environment variable:");
        println!("   - For OpenAI: export OPENAI_API_KEY='your-key'");
        println!("   - For Gemini: export GEMINI_API_KEY='your-key'");
        println!("3. Run: git-reporter generate");

        Ok(())
    }
}

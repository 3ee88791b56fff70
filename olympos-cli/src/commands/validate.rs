//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = CliConfig::load(&self.config)
            .and_then(|config| config.validate().map(|_| config).map_err(Into::into));

        match checked {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Source URL: {}", config.source.url);
                println!("  Timeout: {}s", config.source.timeout_secs);
                println!("  User-Agent: {}", config.source.user_agent);
                println!("  Output format: {}", config.output.default_format.as_str());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}

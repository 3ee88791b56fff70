//! Generate config command implementation

use crate::config::{default_user_agent, DEFAULT_TIMEOUT_SECS};
use anyhow::{Context, Result};
use clap::Args;
use olympos_core::constants::DEFAULT_SOURCE_URL;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the source URL or output defaults");
        println!("2. Validate your configuration:");
        println!("   olympos validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!("   olympos process --config {}", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Olympos configuration
#
# Every key is optional. Command-line flags take precedence over this file,
# and OLYMPOS_URL takes precedence over [source].url.

[source]
# Plain-text document to fetch
url = "{}"

# HTTP timeout in seconds (must be greater than 0)
timeout_secs = {}

# User-Agent header sent with the request
user_agent = "{}"

[output]
# One of: "text", "json", "markdown"
default_format = "text"

# Pretty print JSON output
pretty_json = true
"#,
            DEFAULT_SOURCE_URL,
            DEFAULT_TIMEOUT_SECS,
            default_user_agent()
        )
    }
}

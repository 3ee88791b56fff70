//! `olympos` binary entry point

use clap::Parser;
use olympos_cli::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

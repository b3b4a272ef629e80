//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{ConfigCmd, GenerateCmd, ScanCmd};

#[derive(Parser)]
#[command(name = "depgen")]
#[command(about = "depgen - dependency manifests from the imports in your source tree")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan sources and write requirements.txt / package.json
    Generate(GenerateCmd),

    /// Show detected third-party imports without writing anything
    Scan(ScanCmd),

    /// Manage .depgen.toml
    Config(ConfigCmd),
}

impl Command {
    pub async fn execute(&self) -> anyhow::Result<()> {
        match self {
            Command::Generate(cmd) => cmd.run().await,
            Command::Scan(cmd) => cmd.run().await,
            Command::Config(cmd) => cmd.run().await,
        }
    }
}

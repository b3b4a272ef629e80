//! Config command - inspect or create `.depgen.toml`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::{CONFIG_FILE, GeneratorConfig};

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub command: ConfigSubCmd,
}

#[derive(Subcommand)]
pub enum ConfigSubCmd {
    /// Show the effective configuration for a directory
    Show(DirArg),

    /// Write a .depgen.toml with default values
    Init(InitArgs),
}

#[derive(Args)]
pub struct DirArg {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Args)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing config file
    #[arg(long, short = 'f')]
    pub force: bool,
}

impl ConfigCmd {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            ConfigSubCmd::Show(args) => {
                let config = GeneratorConfig::load(&args.path)?;
                let path = args.path.join(CONFIG_FILE);
                if path.exists() {
                    println!("Config: {}", path.display());
                } else {
                    println!("Config: (defaults, no {} found)", CONFIG_FILE);
                }
                println!();
                print!("{}", toml::to_string_pretty(&config)?);
            }
            ConfigSubCmd::Init(args) => {
                let path = args.path.join(CONFIG_FILE);
                if path.exists() && !args.force {
                    anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
                }
                GeneratorConfig::default().save(&args.path)?;
                println!("Wrote {}", path.display());
            }
        }
        Ok(())
    }
}

//! Generate command - scan sources and write dependency manifests.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::{DEFAULT_OUTPUT_FILE, GeneratorConfig};
use crate::pipeline::generate_manifests;

#[derive(Args)]
pub struct GenerateCmd {
    /// File or directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Name of the Python manifest
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Directory to write manifests into (default: current directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Don't look up latest versions; write every package unpinned
    #[arg(long)]
    pub no_versions: bool,

    /// Number of registry lookups to run concurrently
    #[arg(long, short = 'j')]
    pub concurrency: Option<usize>,

    /// Registry request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Additional directory names to skip (repeatable)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Config file (default: .depgen.toml in the scanned directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl GenerateCmd {
    pub async fn run(&self) -> Result<()> {
        let config = self.effective_config()?;

        println!("Scanning {} for imports...", self.path.display());

        let report = generate_manifests(&self.path, &self.output, &config).await?;

        if report.is_empty() {
            println!("No third-party imports found.");
            return Ok(());
        }

        for bucket in &report.buckets {
            println!();
            println!(
                "{} packages found ({}):",
                bucket.language.name(),
                bucket.packages.len()
            );
            for pkg in &bucket.packages {
                match &pkg.version {
                    Some(v) => println!("  {} {}", pkg.name, v),
                    None => println!("  {} (version unknown)", pkg.name),
                }
            }
        }

        println!();
        for path in report.written() {
            println!("Saved {}", path.display());
        }

        Ok(())
    }

    fn effective_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load_file(path)?,
            // A missing root is reported by the scanner, not here.
            None if self.path.exists() => GeneratorConfig::load(&self.path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(dir) = &self.out_dir {
            config.output_dir = dir.clone();
        }
        if self.no_versions {
            config.resolve_versions = false;
        }
        if let Some(n) = self.concurrency {
            config.concurrency = n;
        }
        if let Some(secs) = self.timeout {
            config.timeout_secs = secs;
        }
        config.exclude.extend(self.exclude.iter().cloned());

        Ok(config)
    }
}

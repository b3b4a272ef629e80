//! Scan command - show detected imports without writing anything.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::GeneratorConfig;
use crate::languages::resolve_name;
use crate::scanner::{Scanner, SkipRules};

#[derive(Args)]
pub struct ScanCmd {
    /// File or directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Print raw import identifiers as JSON
    #[arg(long)]
    pub json: bool,

    /// Additional directory names to skip (repeatable)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,
}

impl ScanCmd {
    pub async fn run(&self) -> Result<()> {
        let mut exclude = if self.path.exists() {
            GeneratorConfig::load(&self.path)?.exclude
        } else {
            Vec::new()
        };
        exclude.extend(self.exclude.iter().cloned());

        let result = Scanner::new(SkipRules::new(exclude)).scan(&self.path)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if result.is_empty() {
            println!("No third-party imports found.");
            return Ok(());
        }

        for (language, identifiers) in result.iter() {
            println!("{} imports ({}):", language.name(), identifiers.len());
            for id in identifiers {
                let canonical = resolve_name(id, language);
                if canonical == *id {
                    println!("  {}", id);
                } else {
                    println!("  {} -> {}", id, canonical);
                }
            }
        }

        Ok(())
    }
}

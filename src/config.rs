//! Generator configuration.
//!
//! Read from `.depgen.toml` in the scan root when present. Every field is
//! optional; CLI flags override whatever the file sets.
//!
//! ```toml
//! exclude = ["build", ".venv"]
//! timeout_secs = 5
//! concurrency = 8
//! resolve_versions = true
//! output_dir = "."
//! pypi_url = "https://pypi.org/pypi"
//! npm_url = "https://registry.npmjs.org"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::registry::{NPM_REGISTRY, PYPI_API};

pub const CONFIG_FILE: &str = ".depgen.toml";

/// Default name of the Python manifest.
pub const DEFAULT_OUTPUT_FILE: &str = "requirements.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory names to skip in addition to `venv`, `__pycache__` and
    /// `node_modules`.
    pub exclude: Vec<String>,

    /// Per-request registry timeout.
    pub timeout_secs: u64,

    /// Maximum concurrent registry lookups.
    pub concurrency: usize,

    /// Look up latest versions; when false every package is unpinned.
    pub resolve_versions: bool,

    /// Where manifests are written.
    pub output_dir: PathBuf,

    pub pypi_url: String,

    pub npm_url: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            timeout_secs: 5,
            concurrency: 8,
            resolve_versions: true,
            output_dir: PathBuf::from("."),
            pypi_url: PYPI_API.to_string(),
            npm_url: NPM_REGISTRY.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load `.depgen.toml` from `dir`, or defaults if there is none.
    ///
    /// `dir` may also be a file, in which case its parent is searched.
    pub fn load(dir: &Path) -> Result<Self> {
        let dir = if dir.is_file() {
            dir.parent().unwrap_or(dir)
        } else {
            dir
        };

        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_file(&path)
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Write this config as `.depgen.toml` in `dir`.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(dir.join(CONFIG_FILE), content).context("Failed to write config file")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

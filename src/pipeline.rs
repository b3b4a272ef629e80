//! Scan → resolve → write.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::languages::{Language, resolve_name};
use crate::manifests::ManifestWriter;
use crate::registry::{OfflineResolver, RegistryResolver, VersionResolver};
use crate::scanner::{ScanResult, Scanner, SkipRules};
use crate::types::{GenerateError, ResolvedPackage};

/// Packages detected for one language, after alias and version resolution.
#[derive(Debug, Clone, Serialize)]
pub struct Bucket {
    pub language: Language,
    pub packages: Vec<ResolvedPackage>,
    pub manifest: Option<PathBuf>,
}

/// What a generate run found and wrote.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateReport {
    pub buckets: Vec<Bucket>,
}

impl GenerateReport {
    /// True when no third-party imports were found at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.buckets.iter().filter_map(|b| b.manifest.as_deref())
    }
}

/// Manifest generator over a pluggable version resolver.
pub struct Generator<R> {
    scanner: Scanner,
    writer: ManifestWriter,
    resolver: R,
    concurrency: usize,
}

impl<R: VersionResolver> Generator<R> {
    pub fn new(config: &GeneratorConfig, output_file: &str, resolver: R) -> Self {
        Self {
            scanner: Scanner::new(SkipRules::new(config.exclude.iter().cloned())),
            writer: ManifestWriter::new(&config.output_dir, output_file),
            resolver,
            concurrency: config.concurrency.max(1),
        }
    }

    /// Scan `root` and write one manifest per language with imports.
    ///
    /// Fails only when `root` does not exist or a manifest cannot be
    /// written; unreadable files and failed lookups are logged and skipped.
    pub async fn generate(&self, root: &Path) -> Result<GenerateReport, GenerateError> {
        info!(root = %root.display(), "scanning");
        let scan = self.scanner.scan(root)?;
        self.write_manifests(&scan).await
    }

    /// Resolve and write every bucket of an existing scan.
    pub async fn write_manifests(&self, scan: &ScanResult) -> Result<GenerateReport, GenerateError> {
        let mut report = GenerateReport::default();

        if scan.is_empty() {
            info!("no third-party imports found");
            return Ok(report);
        }

        for (language, identifiers) in scan.iter() {
            info!(language = %language, count = identifiers.len(), "packages found");

            let packages = self.resolve(language, canonical_names(language, identifiers)).await;
            let manifest = self.writer.write(language, packages.clone())?;
            if let Some(path) = &manifest {
                info!(language = %language, path = %path.display(), "manifest saved");
            }

            report.buckets.push(Bucket {
                language,
                packages: sorted(packages),
                manifest,
            });
        }

        Ok(report)
    }

    async fn resolve(&self, language: Language, names: BTreeSet<String>) -> Vec<ResolvedPackage> {
        stream::iter(names)
            .map(|name| async move {
                let version = self.resolver.latest_version(&name, language).await;
                ResolvedPackage::new(name, version)
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await
    }
}

/// Alias-resolve identifiers. Distinct imports may share a package
/// (`bs4` and `beautifulsoup4`); the set collapses them.
pub fn canonical_names(language: Language, identifiers: &BTreeSet<String>) -> BTreeSet<String> {
    identifiers
        .iter()
        .map(|id| resolve_name(id, language))
        .collect()
}

fn sorted(mut packages: Vec<ResolvedPackage>) -> Vec<ResolvedPackage> {
    packages.sort_by(|a, b| a.name.cmp(&b.name));
    packages
}

/// Scan `root` and write manifests using the public registries (or none,
/// when `config.resolve_versions` is off).
pub async fn generate_manifests(
    root: &Path,
    output_file: &str,
    config: &GeneratorConfig,
) -> Result<GenerateReport> {
    let report = if config.resolve_versions {
        let resolver = RegistryResolver::new(config)?;
        Generator::new(config, output_file, resolver)
            .generate(root)
            .await?
    } else {
        Generator::new(config, output_file, OfflineResolver)
            .generate(root)
            .await?
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::StaticResolver;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _tmp: TempDir,
        src: PathBuf,
        out: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let tmp = TempDir::new().unwrap();
            let src = tmp.path().join("src");
            let out = tmp.path().join("out");
            fs::create_dir_all(&src).unwrap();
            fs::create_dir_all(&out).unwrap();
            Self { _tmp: tmp, src, out }
        }

        fn write(&self, rel: &str, content: &str) {
            let path = self.src.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        fn config(&self) -> GeneratorConfig {
            GeneratorConfig {
                output_dir: self.out.clone(),
                ..GeneratorConfig::default()
            }
        }

        fn read(&self, name: &str) -> String {
            fs::read_to_string(self.out.join(name)).unwrap()
        }
    }

    #[tokio::test]
    async fn test_alias_used_in_manifest() {
        let fx = Fixture::new();
        fx.write("app.py", "from dotenv import load_dotenv\nimport requests\n");

        let resolver = StaticResolver::default()
            .with(Language::Python, "python-dotenv", "1.0.1")
            .with(Language::Python, "requests", "2.31.0");
        let generator = Generator::new(&fx.config(), "requirements.txt", resolver);
        generator.generate(&fx.src).await.unwrap();

        let content = fx.read("requirements.txt");
        assert_eq!(content, "python-dotenv==1.0.1\nrequests==2.31.0\n");
        assert!(!content.lines().any(|l| l.starts_with("dotenv")));
    }

    #[tokio::test]
    async fn test_unknown_version_is_unpinned() {
        let fx = Fixture::new();
        fx.write("app.py", "import foo\n");
        fx.write("index.js", "const foo = require('foo')\n");

        let generator = Generator::new(&fx.config(), "requirements.txt", StaticResolver::default());
        let report = generator.generate(&fx.src).await.unwrap();

        assert_eq!(fx.read("requirements.txt"), "foo\n");
        let pkg: serde_json::Value = serde_json::from_str(&fx.read("package.json")).unwrap();
        assert_eq!(pkg["dependencies"]["foo"], "*");
        assert_eq!(report.written().count(), 2);
    }

    #[tokio::test]
    async fn test_no_imports_writes_nothing() {
        let fx = Fixture::new();
        fx.write("app.py", "import os\nimport sys\n");
        fx.write("notes.txt", "import requests\n");

        let generator = Generator::new(&fx.config(), "requirements.txt", StaticResolver::default());
        let report = generator.generate(&fx.src).await.unwrap();

        assert!(report.is_empty());
        assert_eq!(fs::read_dir(&fx.out).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_missing_root_writes_nothing() {
        let fx = Fixture::new();
        let generator = Generator::new(&fx.config(), "requirements.txt", StaticResolver::default());

        let err = generator.generate(&fx.src.join("missing")).await.unwrap_err();
        assert!(matches!(err, GenerateError::Configuration(_)));
        assert!(generator.resolver.calls.lock().unwrap().is_empty());
        assert_eq!(fs::read_dir(&fx.out).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_imports_one_line() {
        let fx = Fixture::new();
        fx.write("a.py", "import numpy\n");
        fx.write("b.py", "import numpy\nimport os\n");

        let resolver = StaticResolver::default().with(Language::Python, "numpy", "1.26.4");
        let generator = Generator::new(&fx.config(), "requirements.txt", resolver);
        generator.generate(&fx.src).await.unwrap();

        assert_eq!(fx.read("requirements.txt"), "numpy==1.26.4\n");
        // One lookup per distinct package.
        assert_eq!(generator.resolver.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_aliases_collapse_to_one_package() {
        let fx = Fixture::new();
        fx.write("a.py", "from bs4 import BeautifulSoup\nimport beautifulsoup4\n");

        let generator = Generator::new(&fx.config(), "requirements.txt", StaticResolver::default());
        generator.generate(&fx.src).await.unwrap();

        assert_eq!(fx.read("requirements.txt"), "beautifulsoup4\n");
    }

    #[tokio::test]
    async fn test_idempotent_output() {
        let fx = Fixture::new();
        fx.write("app.py", "import requests\nimport yaml\nimport numpy\n");
        fx.write("web/index.ts", "import axios from 'axios'\nimport React from 'react'\n");
        fx.write("Main.java", "import org.junit.Test;\n");

        let resolver = || {
            StaticResolver::default()
                .with(Language::Python, "requests", "2.31.0")
                .with(Language::JavaScript, "axios", "1.6.8")
        };

        let first = Generator::new(&fx.config(), "requirements.txt", resolver());
        first.generate(&fx.src).await.unwrap();
        let snapshot: Vec<_> = ["requirements.txt", "package.json", "requirements-java.txt"]
            .iter()
            .map(|f| fx.read(f))
            .collect();

        let second = Generator::new(&fx.config(), "requirements.txt", resolver());
        second.generate(&fx.src).await.unwrap();
        let again: Vec<_> = ["requirements.txt", "package.json", "requirements-java.txt"]
            .iter()
            .map(|f| fx.read(f))
            .collect();

        assert_eq!(snapshot, again);
        assert_eq!(snapshot[0], "PyYAML\nnumpy\nrequests==2.31.0\n");
        assert_eq!(snapshot[2], "org\n");
    }

    #[tokio::test]
    async fn test_custom_python_file_name() {
        let fx = Fixture::new();
        fx.write("app.py", "import flask\n");

        let generator = Generator::new(&fx.config(), "deps.txt", StaticResolver::default());
        let report = generator.generate(&fx.src).await.unwrap();

        assert_eq!(fx.read("deps.txt"), "flask\n");
        assert!(!fx.out.join("requirements.txt").exists());
        assert_eq!(report.buckets[0].language, Language::Python);
    }

    #[tokio::test]
    async fn test_generate_manifests_offline() {
        let fx = Fixture::new();
        fx.write("app.py", "import requests\n");
        let config = GeneratorConfig {
            resolve_versions: false,
            ..fx.config()
        };

        let report = generate_manifests(&fx.src, "requirements.txt", &config)
            .await
            .unwrap();

        assert_eq!(fx.read("requirements.txt"), "requests\n");
        assert_eq!(report.buckets.len(), 1);
    }
}

//! Manifest writing.
//!
//! Each language bucket becomes one file, fully rewritten on every run:
//! - Python: `requirements.txt` (name configurable)
//! - JavaScript/TypeScript: `package.json`
//! - anything else: `requirements-<language>.txt`

mod npm;
mod python;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::languages::Language;
use crate::types::{GenerateError, ResolvedPackage};

pub use npm::{PACKAGE_JSON, render_package_json};
pub use python::render_requirements;

/// Writes per-language manifests into a single output directory.
#[derive(Debug, Clone)]
pub struct ManifestWriter {
    out_dir: PathBuf,
    python_file: String,
}

impl ManifestWriter {
    pub fn new(out_dir: impl Into<PathBuf>, python_file: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            python_file: python_file.into(),
        }
    }

    /// Where the manifest for `language` goes.
    pub fn path_for(&self, language: Language) -> PathBuf {
        let file_name = match language {
            Language::Python => self.python_file.clone(),
            Language::JavaScript => PACKAGE_JSON.to_string(),
            other => format!("requirements-{}.txt", other.as_str()),
        };
        self.out_dir.join(file_name)
    }

    /// Write the manifest for one language.
    ///
    /// Packages are sorted by name first so output is reproducible. Returns
    /// `None` without touching the filesystem when `packages` is empty.
    pub fn write(
        &self,
        language: Language,
        mut packages: Vec<ResolvedPackage>,
    ) -> Result<Option<PathBuf>, GenerateError> {
        if packages.is_empty() {
            return Ok(None);
        }

        packages.sort_by(|a, b| a.name.cmp(&b.name));
        packages.dedup_by(|a, b| a.name == b.name);

        let content = match language {
            Language::JavaScript => render_package_json(&packages)?,
            Language::Python => render_requirements(&packages),
            _ => render_names(&packages),
        };

        let path = self.path_for(language);
        write_file(&path, &content)?;
        debug!(path = %path.display(), packages = packages.len(), "wrote manifest");

        Ok(Some(path))
    }
}

/// One bare package name per line.
fn render_names(packages: &[ResolvedPackage]) -> String {
    packages.iter().map(|p| format!("{}\n", p.name)).collect()
}

fn write_file(path: &Path, content: &str) -> Result<(), GenerateError> {
    let write_err = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, content).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_path_for() {
        let writer = ManifestWriter::new("/out", "reqs.txt");
        assert_eq!(writer.path_for(Language::Python), PathBuf::from("/out/reqs.txt"));
        assert_eq!(
            writer.path_for(Language::JavaScript),
            PathBuf::from("/out/package.json")
        );
        assert_eq!(
            writer.path_for(Language::Java),
            PathBuf::from("/out/requirements-java.txt")
        );
        assert_eq!(
            writer.path_for(Language::CSharp),
            PathBuf::from("/out/requirements-csharp.txt")
        );
    }

    #[test]
    fn test_write_sorts_packages() {
        let tmp = TempDir::new().unwrap();
        let writer = ManifestWriter::new(tmp.path(), "requirements.txt");

        let packages = vec![
            ResolvedPackage::new("requests", Some("2.31.0".to_string())),
            ResolvedPackage::unpinned("flask"),
            ResolvedPackage::new("numpy", Some("1.26.4".to_string())),
        ];
        let path = writer.write(Language::Python, packages).unwrap().unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "flask\nnumpy==1.26.4\nrequests==2.31.0\n"
        );
    }

    #[test]
    fn test_write_truncates_previous_content() {
        let tmp = TempDir::new().unwrap();
        let writer = ManifestWriter::new(tmp.path(), "requirements.txt");
        fs::write(tmp.path().join("requirements.txt"), "old==1.0\nstale==2.0\n").unwrap();

        writer
            .write(Language::Python, vec![ResolvedPackage::unpinned("numpy")])
            .unwrap();

        assert_eq!(
            fs::read_to_string(tmp.path().join("requirements.txt")).unwrap(),
            "numpy\n"
        );
    }

    #[test]
    fn test_write_empty_bucket_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let writer = ManifestWriter::new(tmp.path(), "requirements.txt");

        assert!(writer.write(Language::Python, vec![]).unwrap().is_none());
        assert!(!tmp.path().join("requirements.txt").exists());
    }

    #[test]
    fn test_write_other_language_bare_names() {
        let tmp = TempDir::new().unwrap();
        let writer = ManifestWriter::new(tmp.path(), "requirements.txt");

        let packages = vec![
            ResolvedPackage::unpinned("org"),
            ResolvedPackage::new("com", Some("ignored".to_string())),
        ];
        let path = writer.write(Language::Java, packages).unwrap().unwrap();

        assert!(path.ends_with("requirements-java.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "com\norg\n");
    }

    #[test]
    fn test_write_creates_output_dir() {
        let tmp = TempDir::new().unwrap();
        let writer = ManifestWriter::new(tmp.path().join("out/deps"), "requirements.txt");

        let path = writer
            .write(Language::JavaScript, vec![ResolvedPackage::unpinned("lodash")])
            .unwrap()
            .unwrap();
        assert!(path.exists());
    }
}

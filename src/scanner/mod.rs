//! Source tree scanning.
//!
//! Walks the scan root, skipping excluded directories, classifies each file
//! by extension and unions the imports found per language.

mod skip;

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::extract;
use crate::languages::{self, Language};
use crate::types::GenerateError;

pub use skip::SkipRules;

/// Third-party import identifiers found per language.
///
/// Languages with no imports have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScanResult {
    imports: BTreeMap<Language, BTreeSet<String>>,
}

impl ScanResult {
    /// Union `found` into the bucket for `language`.
    pub fn add<I>(&mut self, language: Language, found: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut found = found.into_iter().peekable();
        if found.peek().is_none() {
            return;
        }
        self.imports.entry(language).or_default().extend(found);
    }

    pub fn merge(mut self, other: ScanResult) -> ScanResult {
        for (language, found) in other.imports {
            self.add(language, found);
        }
        self
    }

    #[cfg(test)]
    pub fn get(&self, language: Language) -> Option<&BTreeSet<String>> {
        self.imports.get(&language)
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &BTreeSet<String>)> {
        self.imports.iter().map(|(lang, found)| (*lang, found))
    }
}

/// Walks a source tree and aggregates imports.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    rules: SkipRules,
}

impl Scanner {
    pub fn new(rules: SkipRules) -> Self {
        Self { rules }
    }

    /// Scan a file or directory.
    ///
    /// A missing root is the only error; unreadable files and directories
    /// are logged and skipped.
    pub fn scan(&self, root: &Path) -> Result<ScanResult, GenerateError> {
        if !root.exists() {
            return Err(GenerateError::Configuration(root.to_path_buf()));
        }

        let files = self.collect_files(root);
        debug!(root = %root.display(), files = files.len(), "collected source files");

        let result = files
            .par_iter()
            .map(|(path, language)| (*language, extract::extract(path, language.profile())))
            .fold(ScanResult::default, |mut acc, (language, found)| {
                acc.add(language, found);
                acc
            })
            .reduce(ScanResult::default, ScanResult::merge);

        Ok(result)
    }

    /// Classified files under `root`. A file root is returned as-is if it
    /// has a known extension.
    fn collect_files(&self, root: &Path) -> Vec<(PathBuf, Language)> {
        let mut files = Vec::new();

        if root.is_file() {
            if let Some(language) = languages::classify(root) {
                files.push((root.to_path_buf(), language));
            }
            return files;
        }

        let mut visited = HashSet::new();
        self.collect_recursive(root, root, &mut files, &mut visited);
        files
    }

    fn collect_recursive(
        &self,
        root: &Path,
        dir: &Path,
        files: &mut Vec<(PathBuf, Language)>,
        visited: &mut HashSet<PathBuf>,
    ) {
        // Guard against symlink cycles.
        if let Ok(canonical) = dir.canonicalize() {
            if !visited.insert(canonical) {
                return;
            }
        }

        let entries = match std::fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();

            let relative = path.strip_prefix(root).unwrap_or(&path);
            if self.rules.skips_path(relative) {
                debug!(path = %path.display(), "skipping excluded entry");
                continue;
            }

            if path.is_dir() {
                self.collect_recursive(root, &path, files, visited);
            } else if let Some(language) = languages::classify(&path) {
                files.push((path, language));
            }
        }
    }
}

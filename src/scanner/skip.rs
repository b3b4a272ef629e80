//! Directories that never contain first-party source.

use std::collections::HashSet;
use std::path::{Component, Path};

/// Always skipped, along with everything beneath them.
pub const SKIP_DIRS: &[&str] = &["venv", "__pycache__", "node_modules"];

/// Skip rules: the fixed set plus user-configured names.
#[derive(Debug, Clone, Default)]
pub struct SkipRules {
    extra: HashSet<String>,
}

impl SkipRules {
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extra: extra.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a single path segment is excluded.
    ///
    /// Exact match only: `venvtools` is not `venv`.
    pub fn skips_segment(&self, name: &str) -> bool {
        SKIP_DIRS.contains(&name) || self.extra.contains(name)
    }

    /// Whether any segment of `path` is excluded.
    pub fn skips_path(&self, path: &Path) -> bool {
        path.components().any(|c| match c {
            Component::Normal(name) => name.to_str().is_some_and(|n| self.skips_segment(n)),
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_fixed_dirs() {
        let rules = SkipRules::default();
        assert!(rules.skips_path(Path::new("venv/lib/site.py")));
        assert!(rules.skips_path(Path::new("pkg/__pycache__/mod.pyc")));
        assert!(rules.skips_path(Path::new("web/node_modules/react/index.js")));
        assert!(rules.skips_path(Path::new("a/b/c/venv/d/e.py")));
    }

    #[test]
    fn test_segment_match_is_exact() {
        let rules = SkipRules::default();
        assert!(!rules.skips_path(Path::new("venvtools/app.py")));
        assert!(!rules.skips_path(Path::new("my_venv/app.py")));
        assert!(!rules.skips_path(Path::new(".venv_backup/app.py")));
        assert!(!rules.skips_path(Path::new("src/node_modules_helper.js")));
    }

    #[test]
    fn test_allow_regular_paths() {
        let rules = SkipRules::default();
        assert!(!rules.skips_path(Path::new("")));
        assert!(!rules.skips_path(Path::new("src/main.py")));
        assert!(!rules.skips_path(Path::new("packages/core/index.ts")));
    }

    #[test]
    fn test_extra_excludes() {
        let rules = SkipRules::new(["build", ".venv"]);
        assert!(rules.skips_segment("build"));
        assert!(rules.skips_path(Path::new(".venv/lib/x.py")));
        assert!(!rules.skips_path(Path::new("builder/x.py")));
    }
}

//! Language profiles: which files belong to which language, how their
//! imports look, and which import roots are part of the standard library.
//!
//! The table is built once on first use and never mutated afterwards.
//! Profiles are matched in registration order, first match wins.

mod aliases;
mod stdlib;

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::types::Registry;

pub use aliases::resolve_name;

/// Languages we detect imports for.
///
/// Declaration order is registration order; it also fixes the order in
/// which buckets are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    Java,
    CSharp,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
            Language::CSharp => "csharp",
        }
    }

    /// Human-readable name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Java => "Java",
            Language::CSharp => "C#",
        }
    }

    /// The registry versions are looked up in, if any.
    pub fn registry(&self) -> Option<Registry> {
        match self {
            Language::Python => Some(Registry::Pypi),
            Language::JavaScript => Some(Registry::Npm),
            Language::Java | Language::CSharp => None,
        }
    }

    /// The profile registered for this language.
    pub fn profile(&self) -> &'static LanguageProfile {
        // PROFILES is registered in declaration order.
        &PROFILES[*self as usize]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" | "typescript" | "ts" => Ok(Language::JavaScript),
            "java" => Ok(Language::Java),
            "csharp" | "c#" | "cs" => Ok(Language::CSharp),
            _ => Err(format!("unknown language: {}", s)),
        }
    }
}

/// One import grammar: a line-anchored regex plus the capture group that
/// holds the imported path.
#[derive(Debug)]
pub struct ImportPattern {
    regex: Regex,
    group: usize,
}

impl ImportPattern {
    fn new(pattern: &str, group: usize) -> Self {
        Self {
            regex: Regex::new(pattern).expect("valid import regex"),
            group,
        }
    }

    /// All raw import paths this pattern finds on `line`.
    pub fn captures<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex
            .captures_iter(line)
            .filter_map(move |caps| caps.get(self.group).map(|m| m.as_str()))
    }
}

/// Everything the extractor needs to know about one language.
#[derive(Debug)]
pub struct LanguageProfile {
    pub language: Language,
    /// Lowercase, without the leading dot.
    pub extensions: &'static [&'static str],
    pub comment_markers: &'static [&'static str],
    pub patterns: Vec<ImportPattern>,
}

impl LanguageProfile {
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions.iter().any(|e| *e == ext)
    }

    pub fn is_comment(&self, trimmed: &str) -> bool {
        self.comment_markers.iter().any(|m| trimmed.starts_with(m))
    }

    pub fn is_stdlib(&self, root: &str) -> bool {
        stdlib::is_stdlib(self.language, root)
    }

    /// Reduce a raw import path to its root identifier.
    ///
    /// The first `.`-separated segment is the root. JavaScript specifiers
    /// are further cut at their package boundary: `lodash/fp` is `lodash`,
    /// `@scope/pkg/sub` is `@scope/pkg`.
    pub fn import_root<'a>(&self, raw: &'a str) -> &'a str {
        let root = raw.split('.').next().unwrap_or("");
        match self.language {
            Language::JavaScript => npm_package_root(root),
            _ => root,
        }
    }
}

fn npm_package_root(spec: &str) -> &str {
    let keep = if spec.starts_with('@') { 2 } else { 1 };
    match spec.match_indices('/').nth(keep - 1) {
        Some((idx, _)) => &spec[..idx],
        None => spec,
    }
}

static PROFILES: LazyLock<Vec<LanguageProfile>> = LazyLock::new(|| {
    vec![
        LanguageProfile {
            language: Language::Python,
            extensions: &["py"],
            comment_markers: &["#"],
            patterns: vec![
                ImportPattern::new(r"^import\s+([A-Za-z0-9_.]+)", 1),
                ImportPattern::new(r"^from\s+([A-Za-z0-9_.]+)\s+import", 1),
            ],
        },
        LanguageProfile {
            language: Language::JavaScript,
            extensions: &["js", "jsx", "ts", "tsx", "mjs", "cjs"],
            comment_markers: &["//"],
            patterns: vec![
                ImportPattern::new(r#"^import\s+.*?from\s+['"]([^/'"][^'"]*)['"]"#, 1),
                ImportPattern::new(r#"^import\s+['"]([^/'"][^'"]*)['"]"#, 1),
                ImportPattern::new(r#"^export\s+.*?from\s+['"]([^/'"][^'"]*)['"]"#, 1),
                ImportPattern::new(
                    r#"^(const|let|var)\s+.*?=\s*require\(\s*['"]([^/'"][^'"]*)['"]\s*\)"#,
                    2,
                ),
            ],
        },
        LanguageProfile {
            language: Language::Java,
            extensions: &["java"],
            comment_markers: &["//"],
            patterns: vec![ImportPattern::new(
                r"^import\s+(?:static\s+)?([A-Za-z0-9_.]+?)(?:\.\*)?\s*;",
                1,
            )],
        },
        LanguageProfile {
            language: Language::CSharp,
            extensions: &["cs"],
            comment_markers: &["//"],
            patterns: vec![ImportPattern::new(
                r"^using\s+(?:static\s+)?([A-Za-z0-9_.]+)\s*;",
                1,
            )],
        },
    ]
});

/// All registered profiles, in registration order.
pub fn profiles() -> &'static [LanguageProfile] {
    &PROFILES
}

/// Detect the language of a file from its extension.
pub fn classify(path: &Path) -> Option<Language> {
    let ext = path.extension()?.to_str()?;
    profiles()
        .iter()
        .find(|p| p.matches_extension(ext))
        .map(|p| p.language)
}

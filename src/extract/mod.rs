//! Third-party import detection for a single source file.
//!
//! Matching is line-based: every import pattern of the language is applied
//! to every non-blank, non-comment line, and each captured import path is
//! reduced to its root identifier before the stdlib filter runs.

mod decode;
mod error;

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::languages::LanguageProfile;

pub use decode::{Encoding, FALLBACK_ENCODINGS, decode_with};
pub use error::ExtractError;

/// Extract third-party import identifiers from a file.
///
/// Never fails: unreadable or undecodable files are logged and contribute
/// nothing.
pub fn extract(path: &Path, profile: &LanguageProfile) -> HashSet<String> {
    match try_extract(path, profile, FALLBACK_ENCODINGS) {
        Ok(imports) => imports,
        Err(e) => {
            warn!(error = %e, "skipping file");
            HashSet::new()
        }
    }
}

/// Like [`extract`] but surfaces the failure instead of logging it.
pub fn try_extract(
    path: &Path,
    profile: &LanguageProfile,
    encodings: &[Encoding],
) -> Result<HashSet<String>, ExtractError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (text, encoding) =
        decode_with(&bytes, encodings).ok_or_else(|| ExtractError::Decode {
            path: path.to_path_buf(),
            tried: encodings
                .iter()
                .map(|e| e.name())
                .collect::<Vec<_>>()
                .join(", "),
        })?;

    let imports = extract_from_text(&text, profile);
    debug!(
        path = %path.display(),
        language = %profile.language,
        encoding = encoding.name(),
        count = imports.len(),
        "extracted imports"
    );
    Ok(imports)
}

/// Extract third-party import identifiers from already-decoded source text.
pub fn extract_from_text(text: &str, profile: &LanguageProfile) -> HashSet<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut imports = HashSet::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || profile.is_comment(line) {
            continue;
        }

        for pattern in &profile.patterns {
            for raw in pattern.captures(line) {
                let root = profile.import_root(raw);
                if root.is_empty() || root.starts_with('.') || profile.is_stdlib(root) {
                    continue;
                }
                imports.insert(root.to_string());
            }
        }
    }

    imports
}

use serde::Serialize;

/// Public package registries we can ask for a latest version.
///
/// # Registry ↔ Language Mapping
/// - Pypi → Python
/// - Npm → JavaScript/TypeScript
///
/// Java and C# have no registry configured; their packages are always
/// emitted unpinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Registry {
    Pypi,
    Npm,
}

impl Registry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Registry::Pypi => "pypi",
            Registry::Npm => "npm",
        }
    }

    /// Fold a package name to the registry's naming convention.
    ///
    /// Both PyPI and npm treat names case-insensitively for lookup, and npm
    /// rejects new packages with uppercase letters, so lowercase is canonical.
    pub fn fold_name(&self, name: &str) -> String {
        match self {
            Registry::Pypi | Registry::Npm => name.to_lowercase(),
        }
    }
}

impl std::fmt::Display for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Registry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pypi" => Ok(Registry::Pypi),
            "npm" => Ok(Registry::Npm),
            _ => Err(format!("unknown registry: {}", s)),
        }
    }
}

/// Outcome of a version lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionStatus {
    Resolved,
    Unknown,
}

/// A package ready to be written to a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPackage {
    pub name: String,
    pub version: Option<String>,
    pub status: VersionStatus,
}

impl ResolvedPackage {
    pub fn new(name: impl Into<String>, version: Option<String>) -> Self {
        let status = if version.is_some() {
            VersionStatus::Resolved
        } else {
            VersionStatus::Unknown
        };
        Self {
            name: name.into(),
            version,
            status,
        }
    }

    /// A package whose version was not looked up or could not be found.
    pub fn unpinned(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_from_str() {
        assert_eq!("npm".parse::<Registry>().unwrap(), Registry::Npm);
        assert_eq!("pypi".parse::<Registry>().unwrap(), Registry::Pypi);
    }

    #[test]
    fn test_registry_from_str_case_insensitive() {
        assert_eq!("NPM".parse::<Registry>().unwrap(), Registry::Npm);
        assert_eq!("PyPi".parse::<Registry>().unwrap(), Registry::Pypi);
    }

    #[test]
    fn test_registry_from_str_invalid() {
        assert!("crates".parse::<Registry>().is_err());
        assert!("".parse::<Registry>().is_err());
    }

    #[test]
    fn test_fold_name() {
        assert_eq!(Registry::Pypi.fold_name("Flask"), "flask");
        assert_eq!(Registry::Npm.fold_name("Lodash"), "lodash");
    }

    #[test]
    fn test_resolved_package_status() {
        let pinned = ResolvedPackage::new("requests", Some("2.31.0".to_string()));
        assert_eq!(pinned.status, VersionStatus::Resolved);

        let unpinned = ResolvedPackage::unpinned("foo");
        assert_eq!(unpinned.status, VersionStatus::Unknown);
        assert!(unpinned.version.is_none());
    }
}

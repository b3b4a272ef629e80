//! Registry clients for looking up the latest published version of a
//! package on PyPI and npm.
//!
//! # Example
//!
//! ```ignore
//! use crate::registry::{RegistryResolver, VersionResolver};
//!
//! let resolver = RegistryResolver::new(&config)?;
//! let version = resolver.latest_version("requests", Language::Python).await;
//! ```

mod client;
mod error;
mod npm;
mod pypi;

pub use client::{RegistryClient, VersionResolver, http_client};
pub use error::RegistryError;
pub use npm::{NPM_REGISTRY, NpmClient};
pub use pypi::{PYPI_API, PypiClient};

use tracing::warn;

use crate::config::GeneratorConfig;
use crate::languages::Language;
use crate::types::Registry;

/// Resolver backed by the public registries.
///
/// Dispatches on the language's registry; languages without one resolve to
/// `None` without touching the network.
pub struct RegistryResolver {
    pypi: PypiClient,
    npm: NpmClient,
}

impl RegistryResolver {
    pub fn new(config: &GeneratorConfig) -> Result<Self, RegistryError> {
        let client = http_client(config.timeout())?;
        Ok(Self {
            pypi: PypiClient::with_api_url(client.clone(), config.pypi_url.clone()),
            npm: NpmClient::with_registry_url(client, config.npm_url.clone()),
        })
    }
}

impl VersionResolver for RegistryResolver {
    async fn latest_version(&self, name: &str, language: Language) -> Option<String> {
        let registry = language.registry()?;

        let result = match registry {
            Registry::Pypi => self.pypi.latest_version(name).await,
            Registry::Npm => self.npm.latest_version(name).await,
        };

        match result {
            Ok(version) => Some(version),
            Err(e) => {
                warn!(package = name, registry = %registry, error = %e, "failed to get version");
                None
            }
        }
    }
}

/// Resolver that never looks anything up; every package is unpinned.
pub struct OfflineResolver;

impl VersionResolver for OfflineResolver {
    async fn latest_version(&self, _name: &str, _language: Language) -> Option<String> {
        None
    }
}

//! npm registry client.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::client::{RegistryClient, get_body, validate_name};
use super::error::RegistryError;

pub const NPM_REGISTRY: &str = "https://registry.npmjs.org";

/// npm registry client.
pub struct NpmClient {
    client: Client,
    registry_url: String,
}

impl NpmClient {
    #[cfg(test)]
    pub fn new(client: Client) -> Self {
        Self::with_registry_url(client, NPM_REGISTRY.to_string())
    }

    pub fn with_registry_url(client: Client, registry_url: String) -> Self {
        Self {
            client,
            registry_url: registry_url.trim_end_matches('/').to_string(),
        }
    }
}

// Body of GET /{name}/latest: the manifest of the version tagged latest
#[derive(Debug, Deserialize)]
struct NpmVersionInfo {
    version: String,
}

fn parse_latest(body: &str) -> Result<String, RegistryError> {
    let info: NpmVersionInfo = serde_json::from_str(body)?;
    Ok(info.version)
}

impl RegistryClient for NpmClient {
    async fn latest_version(&self, name: &str) -> Result<String, RegistryError> {
        validate_name(name)?;
        let url = format!("{}/{}/latest", self.registry_url, name);
        debug!(package = name, url = %url, "fetching npm latest");

        let body = get_body(&self.client, &url, name).await?;
        parse_latest(&body)
    }
}

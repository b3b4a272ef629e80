//! PyPI registry client.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::client::{RegistryClient, get_body, validate_name};
use super::error::RegistryError;

pub const PYPI_API: &str = "https://pypi.org/pypi";

/// PyPI registry client.
pub struct PypiClient {
    client: Client,
    api_url: String,
}

impl PypiClient {
    #[cfg(test)]
    pub fn new(client: Client) -> Self {
        Self::with_api_url(client, PYPI_API.to_string())
    }

    pub fn with_api_url(client: Client, api_url: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

// PyPI JSON API response, only the fields we read
#[derive(Debug, Deserialize)]
struct PypiPackageResponse {
    info: PypiInfo,
}

#[derive(Debug, Deserialize)]
struct PypiInfo {
    version: String,
}

fn parse_latest(body: &str) -> Result<String, RegistryError> {
    let pkg: PypiPackageResponse = serde_json::from_str(body)?;
    Ok(pkg.info.version)
}

impl RegistryClient for PypiClient {
    async fn latest_version(&self, name: &str) -> Result<String, RegistryError> {
        validate_name(name)?;
        let url = format!("{}/{}/json", self.api_url, name);
        debug!(package = name, url = %url, "fetching pypi package");

        let body = get_body(&self.client, &url, name).await?;
        parse_latest(&body)
    }
}

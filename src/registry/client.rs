//! Registry client traits and shared plumbing.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, StatusCode};

use super::error::RegistryError;
use crate::languages::Language;

/// Latest-version lookup, as seen by the manifest pipeline.
///
/// Implementations never fail: every failure mode is `None`, meaning the
/// package is emitted unpinned.
pub trait VersionResolver: Send + Sync {
    fn latest_version(
        &self,
        name: &str,
        language: Language,
    ) -> impl Future<Output = Option<String>> + Send;
}

/// A single registry's latest-version endpoint.
///
/// Each registry (pypi, npm) implements this trait.
pub trait RegistryClient: Send + Sync {
    fn latest_version(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<String, RegistryError>> + Send;
}

/// Build the HTTP client shared by all registry clients.
pub fn http_client(timeout: Duration) -> Result<Client, RegistryError> {
    let builder = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("depgen/", env!("CARGO_PKG_VERSION")));

    // Tests talk to loopback servers; keep HTTP(S)_PROXY from intercepting.
    #[cfg(test)]
    let builder = builder.no_proxy();

    Ok(builder.build()?)
}

/// GET `url` and return the body, mapping non-2xx statuses to errors.
pub async fn get_body(client: &Client, url: &str, package: &str) -> Result<String, RegistryError> {
    let response = client.get(url).send().await?;

    match response.status() {
        StatusCode::NOT_FOUND => return Err(RegistryError::PackageNotFound(package.to_string())),
        StatusCode::TOO_MANY_REQUESTS => return Err(RegistryError::RateLimited),
        status if !status.is_success() => {
            return Err(RegistryError::Status {
                package: package.to_string(),
                status: status.as_u16(),
            });
        }
        _ => {}
    }

    Ok(response.text().await?)
}

/// Reject names that would change the shape of the request URL.
pub fn validate_name(name: &str) -> Result<(), RegistryError> {
    let bad = name.is_empty()
        || name.contains(['?', '#', '%', ' ', '\\'])
        || name.split('/').any(|seg| seg == ".." || seg == ".");
    if bad {
        return Err(RegistryError::InvalidPackage(name.to_string()));
    }
    Ok(())
}

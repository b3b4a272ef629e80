//! package.json rendering.
//!
//! Only a `dependencies` object is emitted; unpinned packages get `*`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::ResolvedPackage;

pub const PACKAGE_JSON: &str = "package.json";

const ANY_VERSION: &str = "*";

#[derive(Serialize)]
struct PackageJson<'a> {
    dependencies: BTreeMap<&'a str, &'a str>,
}

pub fn render_package_json(packages: &[ResolvedPackage]) -> Result<String, serde_json::Error> {
    let dependencies = packages
        .iter()
        .map(|pkg| (pkg.name.as_str(), pkg.version.as_deref().unwrap_or(ANY_VERSION)))
        .collect();

    let mut out = serde_json::to_string_pretty(&PackageJson { dependencies })?;
    out.push('\n');
    Ok(out)
}

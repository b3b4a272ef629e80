//! requirements.txt rendering.

use crate::types::ResolvedPackage;

/// One `name==version` line per package, bare `name` when unpinned.
///
/// `packages` must already be sorted.
pub fn render_requirements(packages: &[ResolvedPackage]) -> String {
    let mut out = String::new();
    for pkg in packages {
        match &pkg.version {
            Some(version) => {
                out.push_str(&pkg.name);
                out.push_str("==");
                out.push_str(version);
            }
            None => out.push_str(&pkg.name),
        }
        out.push('\n');
    }
    out
}

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::fs;

use crate::config::PACKAGE_MANIFEST;

#[derive(Debug, Deserialize)]
struct PackageManifest {
    name: String,
}

/// Read the package name from the `package.json` at the root of `dir`.
pub async fn read_package_name(dir: &Path) -> Result<String> {
    let path = dir.join(PACKAGE_MANIFEST);

    let contents = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let manifest: PackageManifest = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid package manifest: {}", path.display()))?;

    Ok(manifest.name)
}

//! Registry file materialization.
//!
//! The registry file is either absent, in which case an empty stub is created,
//! or present, in which case it is overwritten from the template. Prior
//! contents are never merged.

use std::{io::ErrorKind, path::Path};

use anyhow::{Context, Result};
use tokio::fs;

use crate::config::{DECLARATIONS_PLACEHOLDER, IMPORTS_PLACEHOLDER, REGISTRY_TEMPLATE};
use crate::core::aggregate::GeneratedRegistryBody;

/// What was found at the registry path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryFileState {
    Absent,
    Present(String),
}

/// Read the registry file, mapping only "not found" to [`RegistryFileState::Absent`].
pub async fn read_registry_file(path: &Path) -> Result<RegistryFileState> {
    match fs::read_to_string(path).await {
        Ok(contents) => Ok(RegistryFileState::Present(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(RegistryFileState::Absent),
        Err(e) => Err(e)
            .with_context(|| format!("Failed to read registry file: {}", path.display())),
    }
}

/// The template with both placeholders left empty.
pub fn render_stub() -> String {
    fill_template("", "")
}

pub fn render_registry(body: &GeneratedRegistryBody) -> String {
    fill_template(&body.imports_block(), &body.declarations_block())
}

fn fill_template(imports: &str, declarations: &str) -> String {
    REGISTRY_TEMPLATE
        .replacen(DECLARATIONS_PLACEHOLDER, declarations, 1)
        .replacen(IMPORTS_PLACEHOLDER, imports, 1)
}

/// Write `contents` to the registry path, creating missing parent directories.
pub async fn write_registry_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write registry file: {}", path.display()))
}

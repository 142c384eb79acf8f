//! Sync pipeline: collect → extract → aggregate → write.
//!
//! Files are read one at a time, in discovery order, so the generated
//! registry is deterministic for a given set of patterns.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use tokio::fs;

use crate::config::SyncOptions;
use crate::core::{
    aggregate::{ScanResult, build_registry_body},
    extract::extract_registry_members,
    files::collect_file_paths,
    project::read_package_name,
    writer::{
        RegistryFileState, read_registry_file, render_registry, render_stub,
        write_registry_file,
    },
};

/// How a sync run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The registry file did not exist and an empty stub was written.
    Created,
    /// The registry file was regenerated.
    Updated { members: usize, files: usize },
    /// Check mode: the registry file already matches.
    InSync,
    /// Check mode: the registry file differs, or is missing.
    OutOfSync { missing: bool },
}

pub async fn sync_registry(options: &SyncOptions) -> Result<SyncOutcome> {
    let files = collect_file_paths(&options.globs, options.root())?;
    let scan = scan_files(&files, options).await?;

    let registry_path = options.registry_path();
    let state = read_registry_file(&registry_path).await?;

    if options.check {
        return check_registry(&scan, state, options.root()).await;
    }

    match state {
        RegistryFileState::Absent => {
            if options.verbose {
                eprintln!(
                    "{} {}",
                    "Creating template registry file".dimmed(),
                    registry_path.display()
                );
            }
            write_registry_file(&registry_path, &render_stub()).await?;
            Ok(SyncOutcome::Created)
        }
        RegistryFileState::Present(_) => {
            let package_name = read_package_name(options.root()).await?;
            let body = build_registry_body(&scan, options.root(), &package_name);
            write_registry_file(&registry_path, &render_registry(&body)).await?;
            Ok(SyncOutcome::Updated {
                members: body.member_count(),
                files: scan.len(),
            })
        }
    }
}

/// Read and extract every file in order, keeping those that declare members.
pub async fn scan_files(files: &[PathBuf], options: &SyncOptions) -> Result<ScanResult> {
    let mut scan = ScanResult::new();

    for path in files {
        if options.verbose {
            eprintln!(
                "{} {}...",
                "Checking".dimmed(),
                display_relative(path, options.root())
            );
        }

        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let members = extract_registry_members(&contents, &path.to_string_lossy())
            .with_context(|| format!("Failed to extract registry from {}", path.display()))?;

        if options.verbose && !members.is_empty() {
            eprintln!(
                "  {} {} registry member(s)",
                "found".green(),
                members.len()
            );
        }

        if !members.is_empty() {
            scan.insert(path.clone(), members);
        }
    }

    Ok(scan)
}

async fn check_registry(
    scan: &ScanResult,
    state: RegistryFileState,
    root: &Path,
) -> Result<SyncOutcome> {
    let RegistryFileState::Present(current) = state else {
        return Ok(SyncOutcome::OutOfSync { missing: true });
    };

    let package_name = read_package_name(root).await?;
    let expected = render_registry(&build_registry_body(scan, root, &package_name));

    if current == expected {
        Ok(SyncOutcome::InSync)
    } else {
        Ok(SyncOutcome::OutOfSync { missing: false })
    }
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

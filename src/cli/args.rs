//! CLI argument definitions using clap.
//!
//! `sync-template-registry <globs>... [--registry-file <PATH>] [--check]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{DEFAULT_REGISTRY_FILE, SyncOptions};

#[derive(Debug, Parser)]
#[command(name = "sync-template-registry", author, version, about, long_about = None)]
pub struct Arguments {
    /// One or more paths or globs specifying the files to act on
    #[arg(required = true, num_args = 1..)]
    pub globs: Vec<String>,

    /// The path to the file exposing the addon's template registry
    #[arg(long, env = "SYNC_TEMPLATE_REGISTRY_FILE", default_value = DEFAULT_REGISTRY_FILE)]
    pub registry_file: PathBuf,

    /// Stop at checking whether or not the registry is out of sync
    #[arg(long)]
    pub check: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, env = "SYNC_TEMPLATE_REGISTRY_CWD")]
    pub cwd: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Resolve the arguments into run options with an absolute project root.
    pub fn into_options(self) -> Result<SyncOptions> {
        let cwd = match self.cwd {
            Some(dir) => std::path::absolute(&dir)
                .with_context(|| format!("Invalid --cwd: {}", dir.display()))?,
            None => std::env::current_dir().context("Cannot determine current directory")?,
        };

        Ok(SyncOptions {
            globs: self.globs,
            cwd,
            registry_file: self.registry_file,
            check: self.check,
            verbose: self.verbose,
        })
    }
}

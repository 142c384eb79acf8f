use std::path::{Path, PathBuf};

/// Module specifier Glint's ember-loose environment reads its template registry from.
pub const REGISTRY_MODULE: &str = "@glint/environment-ember-loose/registry";

/// Name of the interface inside the registry module block.
pub const REGISTRY_INTERFACE: &str = "Registry";

/// Source folder of an Ember addon, published under the package name.
pub const SOURCE_DIR_PREFIX: &str = "addon/";

/// Project descriptor holding the package name.
pub const PACKAGE_MANIFEST: &str = "package.json";

pub const DEFAULT_REGISTRY_FILE: &str = "addon/template-registry.ts";

pub const IMPORTS_PLACEHOLDER: &str = "[[imports]]";
pub const DECLARATIONS_PLACEHOLDER: &str = "[[registry_declarations]]";

pub const REGISTRY_TEMPLATE: &str = "[[imports]]

export default interface AddonRegistry {
[[registry_declarations]]
}
";

/// Everything a single sync run needs to know.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Path patterns, resolved against `cwd`.
    pub globs: Vec<String>,
    /// Project root.
    pub cwd: PathBuf,
    /// Registry file, relative to `cwd` unless absolute.
    pub registry_file: PathBuf,
    /// Compare only, never write.
    pub check: bool,
    pub verbose: bool,
}

impl SyncOptions {
    pub fn new(globs: Vec<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            globs,
            cwd: cwd.into(),
            registry_file: PathBuf::from(DEFAULT_REGISTRY_FILE),
            check: false,
            verbose: false,
        }
    }

    /// Absolute location of the registry file.
    pub fn registry_path(&self) -> PathBuf {
        self.cwd.join(&self.registry_file)
    }

    pub fn root(&self) -> &Path {
        &self.cwd
    }
}

//! Registry aggregation.
//!
//! Turns the per-file scan results into the two generated sections of the
//! registry file: deduplicated `import type` lines and one property line per
//! member. Output order follows scan order, nothing is sorted.

use std::path::{Component, Path, PathBuf};

use indexmap::{IndexMap, IndexSet};

use crate::config::SOURCE_DIR_PREFIX;
use crate::core::extract::RegistryMember;

/// Files with at least one registry member, in discovery order.
pub type ScanResult = IndexMap<PathBuf, Vec<RegistryMember>>;

/// Generated content for the two template placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedRegistryBody {
    /// Exact import lines, first occurrence wins the position.
    pub imports: IndexSet<String>,
    pub declarations: Vec<String>,
}

impl GeneratedRegistryBody {
    pub fn imports_block(&self) -> String {
        self.imports.iter().map(String::as_str).collect::<Vec<_>>().join("\n")
    }

    pub fn declarations_block(&self) -> String {
        self.declarations.join("\n")
    }

    pub fn member_count(&self) -> usize {
        self.declarations.len()
    }
}

/// Build the generated registry body for `scan`.
///
/// Import paths are made relative to `root`; files under the addon source
/// folder are imported through `package_name`. Duplicate member names are
/// kept as separate lines.
pub fn build_registry_body(
    scan: &ScanResult,
    root: &Path,
    package_name: &str,
) -> GeneratedRegistryBody {
    let mut body = GeneratedRegistryBody::default();

    for (file_path, members) in scan {
        let import_path = import_path(file_path, root, package_name);

        for member in members {
            body.declarations.push(declaration_line(member));
            body.imports.insert(import_line(member, &import_path));
        }
    }

    body
}

pub fn declaration_line(member: &RegistryMember) -> String {
    format!("'{}': typeof {};", member.name, member.type_name)
}

pub fn import_line(member: &RegistryMember, import_path: &str) -> String {
    format!("import type {} from '{}';", member.type_name, import_path)
}

/// Module path `file_path` is imported from by consumers of the package.
pub fn import_path(file_path: &Path, root: &Path, package_name: &str) -> String {
    let relative = relative_path(file_path, root);

    match relative.strip_prefix(SOURCE_DIR_PREFIX) {
        Some(rest) => format!("{package_name}/{rest}"),
        None => relative,
    }
}

/// `path` relative to `base`, `/`-separated, climbing with `..` when needed.
fn relative_path(path: &Path, base: &Path) -> String {
    if let Ok(stripped) = path.strip_prefix(base) {
        return join_components(stripped.components());
    }

    let path_parts: Vec<Component> = path.components().collect();
    let base_parts: Vec<Component> = base.components().collect();
    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let ups = std::iter::repeat_n("..".to_string(), base_parts.len() - common);
    let downs = path_parts[common..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().into_owned());

    ups.chain(downs).collect::<Vec<_>>().join("/")
}

fn join_components<'a>(components: impl Iterator<Item = Component<'a>>) -> String {
    components
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

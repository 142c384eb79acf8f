use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern, glob_with};

/// Expand path patterns into absolute file paths.
///
/// Relative patterns are resolved against `base_dir` (taken literally, glob
/// metacharacters in it are escaped) and expanded in order; within a
/// pattern, matches come back in glob's lexical order. Overlapping patterns
/// may yield the same file twice. Directories are skipped, and wildcards do
/// not match a leading dot.
pub fn collect_file_paths(patterns: &[String], base_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let escaped_base = Pattern::escape(&base_dir.to_string_lossy());
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };

    for pattern in patterns {
        let full_pattern = if Path::new(pattern).is_absolute() {
            pattern.clone()
        } else {
            Path::new(&escaped_base).join(pattern).to_string_lossy().into_owned()
        };

        let entries = glob_with(&full_pattern, options)
            .with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))?;

        for entry in entries {
            let path = entry
                .with_context(|| format!("Cannot access path matching \"{}\"", pattern))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    Ok(files)
}

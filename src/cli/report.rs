//! Outcome printing.
//!
//! Kept apart from the sync engine so the crate can be used as a library.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::core::SyncOutcome;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(outcome: &SyncOutcome, registry_file: &Path) {
    print_to(outcome, registry_file, &mut io::stdout().lock());
}

/// Print the outcome to a custom writer.
pub fn print_to<W: Write>(outcome: &SyncOutcome, registry_file: &Path, writer: &mut W) {
    let file = registry_file.display();

    let _ = match outcome {
        SyncOutcome::Created => writeln!(
            writer,
            "{} Created template registry file {}",
            SUCCESS_MARK.green(),
            file.to_string().bold()
        ),
        SyncOutcome::Updated { members, files } => writeln!(
            writer,
            "{} Done! Template registry updated ({} {} from {} {}).",
            SUCCESS_MARK.green(),
            members,
            plural(*members, "member", "members"),
            files,
            plural(*files, "file", "files"),
        ),
        SyncOutcome::InSync => writeln!(
            writer,
            "{} Template registry {} is up to date.",
            SUCCESS_MARK.green(),
            file.to_string().bold()
        ),
        SyncOutcome::OutOfSync { missing: true } => writeln!(
            writer,
            "{} Template registry {} does not exist.",
            FAILURE_MARK.red(),
            file.to_string().bold()
        ),
        SyncOutcome::OutOfSync { missing: false } => writeln!(
            writer,
            "{} Template registry {} is out of sync. Run without {} to update it.",
            FAILURE_MARK.red(),
            file.to_string().bold(),
            "--check".yellow()
        ),
    };
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

//! CLI output formatting.
//!
//! One line per manifest, naming the file relative to the repository root
//! and how many images it lists:
//!
//! ```text
//! Wrote img/customer_photos/manifest.json with 12 files
//! Wrote img/partners/manifest.json with 1 file
//! ```
//!
//! `check` prints the same inventory without writing:
//!
//! ```text
//! img/customer_photos/manifest.json: 12 files (unchanged)
//! img/partners/manifest.json: 4 files (would change)
//! ```
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Diagnostics go
//! through `tracing` on stderr; stdout carries only these lines.

use crate::manifest::PlannedManifest;
use std::fs;

fn files_label(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{count} files")
    }
}

/// Confirmation lines for manifests that were written.
pub fn format_write_output(planned: &[PlannedManifest]) -> Vec<String> {
    planned
        .iter()
        .map(|p| {
            format!(
                "Wrote {} with {}",
                p.display_path(),
                files_label(p.manifest.files.len())
            )
        })
        .collect()
}

pub fn print_write_output(planned: &[PlannedManifest]) {
    for line in format_write_output(planned) {
        println!("{}", line);
    }
}

/// Whether a manifest on disk already matches what would be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Unchanged,
    WouldChange,
}

impl CheckStatus {
    fn label(self) -> &'static str {
        match self {
            CheckStatus::Unchanged => "unchanged",
            CheckStatus::WouldChange => "would change",
        }
    }
}

/// Compare the rendered manifest with the file currently on disk.
///
/// A missing or unreadable file counts as [`CheckStatus::WouldChange`].
pub fn check_status(planned: &PlannedManifest) -> CheckStatus {
    let current = fs::read_to_string(planned.dir.join(crate::manifest::MANIFEST_FILE_NAME)).ok();
    let rendered = planned.manifest.to_json().ok();
    match (current, rendered) {
        (Some(current), Some(rendered)) if current == rendered => CheckStatus::Unchanged,
        _ => CheckStatus::WouldChange,
    }
}

/// Inventory lines for `check`, one per planned manifest.
pub fn format_check_output(planned: &[(PlannedManifest, CheckStatus)]) -> Vec<String> {
    planned
        .iter()
        .map(|(p, status)| {
            format!(
                "{}: {} ({})",
                p.display_path(),
                files_label(p.manifest.files.len()),
                status.label()
            )
        })
        .collect()
}

pub fn print_check_output(planned: &[(PlannedManifest, CheckStatus)]) {
    for line in format_check_output(planned) {
        println!("{}", line);
    }
}

use crate::enumerator::{FileEnumerator, MATCH_ALL};
use crate::extensions::AllowedExtensions;
use crate::renamer::rename_in_dir;
use crate::rule::{RenameDecision, TrackPrefixRule};
use crate::target::TargetDir;
use anyhow::{Context, Result};
use std::fmt;
use std::io::Write;

/// Settings for one rename pass.
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Also descend into subdirectories (breadth-first).
    pub recurse: bool,
    /// Glob applied to file names before the extension check.
    pub filter: String,
    pub extensions: AllowedExtensions,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            recurse: false,
            filter: MATCH_ALL.to_string(),
            extensions: AllowedExtensions::default(),
        }
    }
}

/// Counters for a finished pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub files_seen: usize,
    pub renamed: usize,
    pub unmatched: usize,
    pub ineligible: usize,
    pub failed: usize,
    pub enumeration_errors: usize,
}

/// Rename every matching file under `target`.
///
/// Progress and per-file failures go to `out`; enumeration problems go to
/// `err`. Only setup failures (bad filter) return an error. A file that
/// cannot be renamed is reported and skipped, and a sink that stops
/// accepting output does not stop the renames.
pub fn rename_operation(
    target: &TargetDir,
    options: &RenameOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<RenameSummary> {
    let rule = TrackPrefixRule::new(options.extensions.clone())
        .context("Failed to compile track number pattern")?;
    let files = FileEnumerator::with_pattern(target.path(), &options.filter, options.recurse)?;

    report(out, format_args!("renaming files in {target}"));

    let mut summary = RenameSummary::default();
    for entry in files {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                summary.enumeration_errors += 1;
                report(err, format_args!("error enumerating files: {e}"));
                continue;
            },
        };
        summary.files_seen += 1;

        let Some(old_name) = entry.name_str() else {
            summary.ineligible += 1;
            continue;
        };

        match rule.decide(old_name) {
            RenameDecision::Ineligible => summary.ineligible += 1,
            RenameDecision::Unmatched => summary.unmatched += 1,
            RenameDecision::Rename(new_name) => {
                match rename_in_dir(&entry.dir, old_name, &new_name) {
                    Ok(()) => {
                        summary.renamed += 1;
                        report(out, format_args!("renaming '{old_name}' to '{new_name}'"));
                    },
                    Err(e) => {
                        summary.failed += 1;
                        report(
                            out,
                            format_args!("failed to rename '{old_name}' to '{new_name}': {e}"),
                        );
                    },
                }
            },
        }
    }

    Ok(summary)
}

/// Write one progress line. A closed pipe (`br | head -1`) must not abort the batch.
fn report(sink: &mut dyn Write, line: fmt::Arguments<'_>) {
    let _ = writeln!(sink, "{line}");
}

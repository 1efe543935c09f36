//! `dirlist [index]` command.

use crate::{
    config::TreeConfig,
    index::{IndexReport, build_indexes},
    log,
    utils::plural::plural_count,
};
use anyhow::Result;

/// Write listings for the configured tree.
///
/// Faults are logged as they happen and never fail the command.
pub fn run_index(config: &TreeConfig) -> Result<()> {
    let report = build_indexes(config);
    if config.dry_run {
        print_plan(&report, config);
    }
    Ok(())
}

/// One line per listing a real run would write.
fn print_plan(report: &IndexReport, config: &TreeConfig) {
    for (dir, summary) in &report.listings {
        let rel = config.root_relative(dir.join(&config.index.filename));
        log!(
            "dry-run";
            "{} ({}, {})",
            rel.display(),
            plural_count(summary.subdirs.len(), "dir"),
            plural_count(summary.files.len(), "file")
        );
    }
}

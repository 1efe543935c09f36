//! Recursive directory listings.
//!
//! Writes a listing document (`index.html` by default) into every
//! directory below the root:
//!
//! - **walk**: depth-first traversal, exclusions, writability checks
//! - **listing**: document rendering and the per-directory writer
//! - **report**: what was visited and written, kept for dry runs
//! - **fault**: recoverable per-directory and per-file errors
//!
//! A run never aborts on a single bad directory or file; each problem is
//! logged, collected in the [`IndexReport`] and skipped.

mod fault;
mod listing;
mod report;
mod walk;


pub use fault::IndexFault;
pub use listing::ListingWriter;
pub use report::{FileEntry, IndexReport, ListingSummary};
pub use walk::{Walker, is_listing_name};

use crate::{config::TreeConfig, log, utils::plural::plural_count};

/// Build listings for the whole tree described by `config`.
pub fn build_indexes(config: &TreeConfig) -> IndexReport {
    let report = Walker::new(config).run();
    log_summary(&report, config.dry_run);
    report
}

fn log_summary(report: &IndexReport, dry_run: bool) {
    let files = plural_count(report.files(), "file");
    let faults = plural_count(report.faults.len(), "fault");

    if dry_run {
        let listings = plural_count(report.listings.len(), "listing");
        log!("dry-run"; "would write {listings} ({files}, {faults})");
    } else {
        let listings = plural_count(report.written(), "listing");
        log!("index"; "wrote {listings} ({files}, {faults})");
    }
}

//! Listing document rendering and output.
//!
//! A [`ListingWriter`] is opened for a directory, receives rows while the
//! directory (and its subdirectories) are processed, and is closed with the
//! fixed footer. In dry-run mode, or when the file cannot be created, rows
//! go to a discarding sink so traversal is unaffected.
//!
//! ```text
//! <h1>docs</h1>
//! <table>
//!   ..               (parent row, optional)
//!   guides/          (subdirectory rows, alphabetical)
//!   notes.txt  2024-06-15T14:30:45Z  2 KB   (file rows, newest first)
//! </table>
//! ```

use super::FileEntry;
use crate::utils::{
    date::DateTimeUtc,
    html::{escape, escape_attr},
    path::encode_href,
    size::pretty_size,
};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

// ============================================================================
// Rendering
// ============================================================================

/// Document head, heading and the opening of the table.
pub fn render_header(heading: &str) -> String {
    let heading = escape(heading);
    format!(
        r#"<!DOCTYPE html>
<html>
 <head>
  <meta charset="utf-8">
  <title>{heading}</title>
 </head>
 <body>
  <div>
   <h1>{heading}</h1>
   <table cellspacing="15">
    <thead><tr><th>name</th><th>date</th><th>size</th></tr></thead>
    <tbody>
"#
    )
}

/// Row linking to the parent directory's listing.
pub fn render_parent_row(index_name: &str) -> String {
    format!(
        "     <tr><td colspan=\"3\"><a href=\"../{}\">..</a></td></tr>\n",
        escape_attr(&encode_href(index_name))
    )
}

/// Row linking to a subdirectory's listing; `segment` is the encoded name.
pub fn render_dir_row(name: &str, segment: &str, index_name: &str) -> String {
    let href = format!("{segment}/{}", encode_href(index_name));
    format!(
        "     <tr><td colspan=\"3\"><a href=\"{}\">{}/</a></td></tr>\n",
        escape_attr(&href),
        escape(name)
    )
}

/// Row for a file: link, ISO 8601 UTC timestamp and human-readable size.
pub fn render_file_row(entry: &FileEntry) -> String {
    format!(
        "     <tr><td><a href=\"{}\">{}</a></td><td>{}</td><td><span class=\"size\">{}</span></td></tr>\n",
        escape_attr(&entry.href),
        escape(&entry.name),
        DateTimeUtc::from_system_time(entry.timestamp).to_rfc3339(),
        pretty_size(entry.size)
    )
}

/// Fixed footer closing the table and the document.
pub const FOOTER: &str = "    </tbody>
   </table>
  </div>
 </body>
</html>
";

// ============================================================================
// Writer
// ============================================================================

enum Output {
    File(BufWriter<File>),
    Discard,
}

/// An open listing document.
///
/// The first write error is kept and reported by [`finish`](Self::finish);
/// everything after it is discarded.
pub struct ListingWriter {
    path: PathBuf,
    out: Output,
    error: Option<io::Error>,
}

impl ListingWriter {
    /// Create (truncate) the listing file at `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            out: Output::File(BufWriter::new(file)),
            error: None,
        })
    }

    /// A writer that accepts rows but writes nothing.
    pub fn discard(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            out: Output::Discard,
            error: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&mut self, heading: &str, parent: Option<&str>) {
        self.emit(&render_header(heading));
        if let Some(index_name) = parent {
            self.emit(&render_parent_row(index_name));
        }
    }

    pub fn dir_row(&mut self, name: &str, segment: &str, index_name: &str) {
        self.emit(&render_dir_row(name, segment, index_name));
    }

    pub fn file_row(&mut self, entry: &FileEntry) {
        self.emit(&render_file_row(entry));
    }

    /// Write the footer and close the document.
    ///
    /// Returns whether a file was written; `Err` carries the first write error.
    pub fn finish(mut self) -> io::Result<bool> {
        self.emit(FOOTER);
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        match self.out {
            Output::File(mut w) => w.flush().map(|()| true),
            Output::Discard => Ok(false),
        }
    }

    fn emit(&mut self, chunk: &str) {
        let result = match &mut self.out {
            Output::File(w) => w.write_all(chunk.as_bytes()),
            Output::Discard => Ok(()),
        };
        if let Err(e) = result {
            self.error = Some(e);
            self.out = Output::Discard;
        }
    }
}

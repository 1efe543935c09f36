//! URL processing utilities.
//!
//! Listing hrefs and feed links are built from filesystem names, so every
//! path segment is percent-encoded while `/` separators are kept.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::{
    ffi::OsStr,
    path::{Component, Path},
};

/// Characters escaped inside a single URL path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode a relative href, segment by segment.
///
/// # Examples
/// ```ignore
/// assert_eq!(encode_href("my dir/index.html"), "my%20dir/index.html");
/// assert_eq!(encode_href("a#b.txt"), "a%23b.txt");
/// ```
pub fn encode_href(href: &str) -> String {
    href.split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Percent-encode a raw filesystem name as one URL path segment.
///
/// On unix the name's bytes are encoded as-is, so names that are not
/// valid UTF-8 still link to the right entry.
#[cfg(unix)]
pub fn encode_segment(name: &OsStr) -> String {
    use percent_encoding::percent_encode;
    use std::os::unix::ffi::OsStrExt;
    percent_encode(name.as_bytes(), SEGMENT).to_string()
}

#[cfg(not(unix))]
pub fn encode_segment(name: &OsStr) -> String {
    utf8_percent_encode(&name.to_string_lossy(), SEGMENT).to_string()
}

/// Convert a relative filesystem path into an encoded URL path.
///
/// Only normal components are kept, joined with `/`.
pub fn relative_url(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(encode_segment(s)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

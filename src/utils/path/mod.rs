//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization and exclusion checks
//! - [`route`]: URL helpers (`encode_href`, `encode_segment`, `relative_url`)

pub mod fs;
pub mod route;

pub use fs::{contains_marker, normalize_path};
pub use route::{encode_href, encode_segment, relative_url};

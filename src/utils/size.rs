//! Human-readable byte sizes with binary prefixes.

/// Unit table, largest first. The byte unit carries singular/plural forms.
const UNITS: [(u64, &str); 5] = [
    (1 << 50, "PB"),
    (1 << 40, "TB"),
    (1 << 30, "GB"),
    (1 << 20, "MB"),
    (1 << 10, "KB"),
];

/// Format a byte count using the largest unit the value reaches.
///
/// The amount is truncated, never rounded.
///
/// # Examples
///
/// - `pretty_size(1)` -> `"1 byte"`
/// - `pretty_size(1023)` -> `"1023 bytes"`
/// - `pretty_size(1_073_741_823)` -> `"1023 MB"`
pub fn pretty_size(bytes: u64) -> String {
    for (factor, unit) in UNITS {
        if bytes >= factor {
            return format!("{} {unit}", bytes / factor);
        }
    }
    if bytes == 1 {
        "1 byte".to_string()
    } else {
        format!("{bytes} bytes")
    }
}

//! Human-readable data formatting utilities.

use chrono::{DateTime, Utc};
use chrono_humanize::Humanize;
use humansize::{BINARY, format_size as format_size_human};


/// Formats a byte size using binary units (KiB, MiB).
///
/// # Examples
///
/// ```
/// use libquay::format::format_size;
///
/// assert_eq!(format_size(1024 * 1024 * 5), "5 MiB");
/// ```
pub fn format_size(size_bytes: u64) -> String {
    format_size_human(size_bytes, BINARY)
}

/// Formats a timestamp relative to now ("2 days ago").
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.humanize()
}

/// Shortens a `sha256:` digest to its first 12 hex characters.
///
/// # Examples
///
/// ```
/// use libquay::format::short_digest;
///
/// assert_eq!(
///     short_digest("sha256:b5557b4f77e7382b3203b940aaa050286e8f201d13520c169fdd2cab5bc3b88a"),
///     "b5557b4f77e7"
/// );
/// ```
pub fn short_digest(digest: &str) -> &str {
    let hex = digest.split_once(':').map(|(_, h)| h).unwrap_or(digest);
    hex.get(..12).unwrap_or(hex)
}

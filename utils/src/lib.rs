//! Shared utilities for the FileShare workspace.
//!
//! This crate contains helpers used by more than one crate in the
//! workspace, mainly display formatting for file metadata.

pub mod version_info;

use chrono::{DateTime, Utc};

/// Format a byte count as a short human-readable size.
///
/// Sizes below 1 KiB are shown as whole bytes; everything above uses one
/// decimal place and binary units, which matches what the file list shows.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}

/// Format an upload timestamp for display in the file list.
pub fn format_uploaded_at(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    #[test]
    fn human_size_bytes() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(1023), "1023 B");
    }

    #[test]
    fn human_size_kilobytes() {
        assert_eq!(human_size(1024), "1.0 KB");
        assert_eq!(human_size(1536), "1.5 KB");
    }

    #[test]
    fn human_size_megabytes() {
        assert_eq!(human_size(2_000_000), "1.9 MB");
        assert_eq!(human_size(100 * 1024 * 1024), "100.0 MB");
    }

    #[test]
    fn human_size_gigabytes() {
        assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn format_uploaded_at_short_date() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 12, 30, 0).unwrap();
        assert_eq!(format_uploaded_at(at), "Mar 7, 2024");
    }
}

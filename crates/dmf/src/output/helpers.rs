//! Common helper functions for output formatting.

use chrono::DateTime;
use demo_filter_rs::filter::Flags;

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats a byte count with a binary unit.
pub fn format_size(bytes: i64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{value:.1} {unit}")
}

/// Formats a Unix timestamp as a UTC date and time.
pub fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| secs.to_string())
}

/// Names of the set flags, for display.
pub fn flag_names(flags: Flags) -> Vec<&'static str> {
    let mut names = Vec::new();
    if flags.contains(Flags::NEEDS_HEADER) {
        names.push("header");
    }
    if flags.contains(Flags::NEEDS_FILESYSTEM_INFO) {
        names.push("filesystem");
    }
    names
}

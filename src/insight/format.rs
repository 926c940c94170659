//! Human-readable rendering for durations and byte sizes.

/// Format seconds as `m:ss` (e.g. 185 becomes `3:05`). Fractions are floored.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Like [`format_duration`], rendering an unknown duration as `--:--`.
pub fn format_duration_opt(seconds: Option<f64>) -> String {
    match seconds {
        Some(s) => format_duration(s),
        None => "--:--".to_string(),
    }
}

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Format a byte count (e.g. 4_200_000 becomes `4.0 MB`).
pub fn format_size(bytes: u64) -> String {
    let b = bytes as f64;
    if b >= MIB {
        format!("{:.1} MB", b / MIB)
    } else if b >= KIB {
        format!("{:.0} KB", b / KIB)
    } else {
        format!("{bytes} B")
    }
}

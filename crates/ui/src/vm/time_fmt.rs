use chrono::Duration;

/// Countdown label, `m:ss`.
#[must_use]
pub fn format_countdown(secs: u32) -> String {
    let minutes = secs / 60;
    let remainder = secs % 60;
    format!("{minutes}:{remainder:02}")
}

/// Elapsed label, `Xm Ys`. Negative durations read as zero.
#[must_use]
pub fn format_elapsed(value: Duration) -> String {
    let total = value.num_seconds().max(0);
    let minutes = total / 60;
    let seconds = total % 60;
    format!("{minutes}m {seconds}s")
}

//! Presentation helpers for the assessment view.

/// "Question i of N" counter for the statement under the cursor.
#[must_use]
pub fn progress_label(position: usize, total: usize) -> String {
    format!("Question {} of {}", position + 1, total)
}

/// Progress bar width in whole percent for the statement under the cursor.
#[must_use]
pub fn progress_percent(position: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let fraction = (position + 1) as f64 / total as f64;
    (fraction * 100.0).round() as u32
}

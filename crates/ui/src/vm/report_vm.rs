//! Presentation helpers for the results view.

use quiz_core::model::CategoryProfile;

/// Heading for one report card.
///
/// The category's everyday label is appended only when it differs from the
/// profile name, so "Type 9: The Peacemaker" is not doubled up.
#[must_use]
pub fn profile_heading(profile: &CategoryProfile, label: Option<&str>) -> String {
    let base = format!("Type {}: {}", profile.id, profile.name);
    match label {
        Some(label) if label != profile.name => format!("{base} — {label}"),
        _ => base,
    }
}

/// Score display for a ranked report entry.
#[must_use]
pub fn score_line(average: f64, total: u32) -> String {
    format!("{average:.2} / 5 ({total} points)")
}

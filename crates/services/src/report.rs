use std::sync::Arc;

use content::ContentStore;
use quiz_core::ScoreEntry;
use quiz_core::model::{CategoryId, CategoryProfile};

/// One category in the rendered report: its profile joined with the
/// reader's score for it.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub category: CategoryId,
    pub total: u32,
    pub average: f64,
    pub profile: Arc<CategoryProfile>,
}

/// The full report: ranked entries, or every profile in preview.
#[derive(Debug, Clone)]
pub struct Report {
    entries: Vec<ReportEntry>,
    preview: bool,
}

impl Report {
    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// True when no scores were available and the report shows every
    /// profile in natural order with zeroed numbers.
    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.preview
    }

    /// Category of the top-ranked entry, used for the initial expansion.
    #[must_use]
    pub fn first_category(&self) -> Option<CategoryId> {
        self.entries.first().map(|entry| entry.category)
    }
}

/// Join score entries with their profiles, ranked by average descending.
///
/// Scores without a matching profile record are dropped. Ties on average
/// break toward the lower category id so the ranking is deterministic.
/// An empty score set yields a preview report over every profile.
#[must_use]
pub fn build_report(store: &ContentStore, scores: &[ScoreEntry]) -> Report {
    if scores.is_empty() {
        let entries = store
            .profiles()
            .iter()
            .map(|profile| ReportEntry {
                category: CategoryId::new(profile.id),
                total: 0,
                average: 0.0,
                profile: Arc::clone(profile),
            })
            .collect();
        return Report {
            entries,
            preview: true,
        };
    }

    let mut entries: Vec<ReportEntry> = scores
        .iter()
        .filter_map(|entry| {
            store.profile(entry.category).map(|profile| ReportEntry {
                category: entry.category,
                total: entry.total,
                average: entry.average,
                profile,
            })
        })
        .collect();
    entries.sort_by(|a, b| {
        b.average
            .total_cmp(&a.average)
            .then_with(|| a.category.cmp(&b.category))
    });
    Report {
        entries,
        preview: false,
    }
}

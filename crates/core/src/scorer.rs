//! Per-category aggregation of recorded responses.

use std::collections::HashMap;

use crate::model::{CategoryId, ScaleValue, Statement, StatementId};

/// Derived total/average agreement for one category.
///
/// Only emitted for categories with at least one answered statement, so
/// `average` is always well defined.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub category: CategoryId,
    pub total: u32,
    pub average: f64,
}

/// Aggregates recorded responses into one `ScoreEntry` per category.
///
/// Statements without a recorded response are excluded from both the total
/// and the count; categories where nothing was answered produce no entry at
/// all. Callers are responsible for ordering the output before display.
///
/// Callers must scope `responses` to the given statement set; keys that
/// reference no statement are simply never visited.
#[must_use]
pub fn score(
    statements: &[Statement],
    responses: &HashMap<StatementId, ScaleValue>,
) -> Vec<ScoreEntry> {
    let mut totals: HashMap<CategoryId, (u32, u32)> = HashMap::new();

    for statement in statements {
        let Some(value) = responses.get(&statement.id()) else {
            continue;
        };
        let entry = totals.entry(statement.category()).or_insert((0, 0));
        entry.0 += u32::from(value.value());
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(category, (total, count))| ScoreEntry {
            category,
            total,
            average: f64::from(total) / f64::from(count),
        })
        .collect()
}

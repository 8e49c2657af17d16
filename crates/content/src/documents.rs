//! Raw serde shapes of the two embedded content documents.
//!
//! The statement document maps category keys (`t1`..`t9`) to display
//! metadata plus an ordered statement list; the profile document is a flat
//! list of rich per-category records keyed by numeric id.

use serde::Deserialize;
use std::collections::BTreeMap;

use quiz_core::model::CategoryProfile;

#[derive(Debug, Deserialize)]
pub(crate) struct StatementGroup {
    pub name: String,
    pub label: String,
    pub statements: Vec<RawStatement>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStatement {
    pub number: u16,
    pub text: String,
}

// Keys are parsed and re-sorted by numeric id in the store; the map type
// only needs to be deterministic.
pub(crate) type StatementDocument = BTreeMap<String, StatementGroup>;

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileDocument {
    pub types: Vec<CategoryProfile>,
}

pub(crate) const STATEMENTS_JSON: &str = include_str!("../data/statements.json");
pub(crate) const PROFILES_JSON: &str = include_str!("../data/profiles.json");

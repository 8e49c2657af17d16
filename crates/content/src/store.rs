use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use thiserror::Error;

use quiz_core::model::{Category, CategoryId, CategoryProfile, Statement, StatementId};

use crate::documents::{PROFILES_JSON, STATEMENTS_JSON, ProfileDocument, StatementDocument};

/// Errors raised while loading and validating the content documents.
///
/// These can only surface at startup (or in tests feeding fixture
/// documents); once a store is built it is immutable and infallible.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
    #[error("invalid category key in statement document: {key}")]
    InvalidCategoryKey { key: String },
    #[error("duplicate statement id: {id}")]
    DuplicateStatement { id: StatementId },
    #[error("duplicate profile id: {id}")]
    DuplicateProfile { id: u8 },
    #[error("statement document defines no statements")]
    Empty,
}

/// Read-only dataset of quiz statements and per-category profiles.
///
/// Loaded once at process start. Statements are flattened in category-id
/// order, which doubles as the "natural order" preview mode displays.
/// Profiles are shared via `Arc` so report entries reference rather than
/// copy the static records.
#[derive(Debug, Clone)]
pub struct ContentStore {
    categories: Vec<Category>,
    statements: Vec<Statement>,
    profiles: Vec<Arc<CategoryProfile>>,
    profile_index: HashMap<CategoryId, Arc<CategoryProfile>>,
}

impl ContentStore {
    /// Load the embedded content documents.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if either document fails to parse or violates
    /// an integrity rule. With unmodified embedded data this cannot happen,
    /// but a bad content edit should fail at launch rather than at render.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_documents(STATEMENTS_JSON, PROFILES_JSON)
    }

    /// Build a store from raw JSON documents.
    ///
    /// Used by `load()` for the embedded data and by tests for small
    /// fixture stores.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` for parse failures, unparsable category keys,
    /// duplicate statement or profile ids, or an empty statement set.
    pub fn from_documents(statements_json: &str, profiles_json: &str) -> Result<Self, ContentError> {
        let statement_doc: StatementDocument = serde_json::from_str(statements_json)?;
        let profile_doc: ProfileDocument = serde_json::from_str(profiles_json)?;

        let mut groups: Vec<(CategoryId, _)> = statement_doc
            .into_iter()
            .map(|(key, group)| {
                let id: CategoryId = key
                    .parse()
                    .map_err(|_| ContentError::InvalidCategoryKey { key: key.clone() })?;
                Ok((id, group))
            })
            .collect::<Result<_, ContentError>>()?;
        groups.sort_by_key(|(id, _)| *id);

        let mut categories = Vec::with_capacity(groups.len());
        let mut statements = Vec::new();
        let mut seen_ids = HashSet::new();
        for (id, group) in groups {
            categories.push(Category::new(id, group.name, group.label));
            for raw in group.statements {
                let statement_id = StatementId::new(id, raw.number);
                if !seen_ids.insert(statement_id) {
                    return Err(ContentError::DuplicateStatement { id: statement_id });
                }
                statements.push(Statement::new(statement_id, raw.text));
            }
        }

        if statements.is_empty() {
            return Err(ContentError::Empty);
        }

        let mut profiles: Vec<Arc<CategoryProfile>> = profile_doc
            .types
            .into_iter()
            .map(Arc::new)
            .collect();
        profiles.sort_by_key(|profile| profile.id);

        let mut profile_index = HashMap::with_capacity(profiles.len());
        for profile in &profiles {
            let id = CategoryId::new(profile.id);
            if profile_index.insert(id, Arc::clone(profile)).is_some() {
                return Err(ContentError::DuplicateProfile { id: profile.id });
            }
        }

        Ok(Self {
            categories,
            statements,
            profiles,
            profile_index,
        })
    }

    /// Categories in natural (id) order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id() == id)
    }

    /// All statements, flattened in category order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Profiles in natural (id) order.
    #[must_use]
    pub fn profiles(&self) -> &[Arc<CategoryProfile>] {
        &self.profiles
    }

    #[must_use]
    pub fn profile(&self, id: CategoryId) -> Option<Arc<CategoryProfile>> {
        self.profile_index.get(&id).cloned()
    }
}

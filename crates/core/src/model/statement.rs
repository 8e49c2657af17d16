use serde::{Deserialize, Serialize};

use crate::model::{CategoryId, StatementId};

/// A single quiz prompt the user rates on the agreement scale.
///
/// Immutable once loaded from the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    id: StatementId,
    text: String,
}

impl Statement {
    #[must_use]
    pub fn new(id: StatementId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> StatementId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.id.category()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

use serde::{Deserialize, Serialize};

use crate::model::CategoryId;

/// Fixed display metadata for one personality category.
///
/// Categories are defined by the content store and never change for the
/// life of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    label: String,
}

impl Category {
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            label: label.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Primary display name, e.g. "The Reformer".
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Secondary display label; may equal the name.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

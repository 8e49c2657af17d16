use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a personality Category.
///
/// The textual form matches the content-document key format: `t1`..`t9`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(u8);

impl CategoryId {
    /// Creates a new `CategoryId`
    #[must_use]
    pub fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the underlying numeric value
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Unique identifier for a Statement, derived from its category and ordinal.
///
/// The textual form is `t<category>-<ordinal>`, e.g. `t4-2`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatementId {
    category: CategoryId,
    number: u16,
}

impl StatementId {
    /// Creates a new `StatementId`
    #[must_use]
    pub fn new(category: CategoryId, number: u16) -> Self {
        Self { category, number }
    }

    /// The category this statement belongs to
    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// The statement's ordinal within its category
    #[must_use]
    pub fn number(&self) -> u16 {
        self.number
    }
}

impl fmt::Debug for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryId(t{})", self.0)
    }
}

impl fmt::Debug for StatementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatementId(t{}-{})", self.category.0, self.number)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl fmt::Display for StatementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.number)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing an ID from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl ParseIdError {
    fn new(kind: &'static str) -> Self {
        Self { kind }
    }
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for CategoryId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('t')
            .and_then(|digits| digits.parse::<u8>().ok())
            .map(CategoryId::new)
            .ok_or_else(|| ParseIdError::new("CategoryId"))
    }
}

impl FromStr for StatementId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, number) = s
            .split_once('-')
            .ok_or_else(|| ParseIdError::new("StatementId"))?;
        let category: CategoryId = category
            .parse()
            .map_err(|_| ParseIdError::new("StatementId"))?;
        let number: u16 = number
            .parse()
            .map_err(|_| ParseIdError::new("StatementId"))?;
        Ok(StatementId::new(category, number))
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_id_display() {
        let id = CategoryId::new(4);
        assert_eq!(id.to_string(), "t4");
    }

    #[test]
    fn test_category_id_from_str() {
        let id: CategoryId = "t7".parse().unwrap();
        assert_eq!(id, CategoryId::new(7));
    }

    #[test]
    fn test_category_id_from_str_invalid() {
        assert!("7".parse::<CategoryId>().is_err());
        assert!("type-7".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_statement_id_display() {
        let id = StatementId::new(CategoryId::new(2), 3);
        assert_eq!(id.to_string(), "t2-3");
    }

    #[test]
    fn test_statement_id_from_str() {
        let id: StatementId = "t9-12".parse().unwrap();
        assert_eq!(id, StatementId::new(CategoryId::new(9), 12));
    }

    #[test]
    fn test_statement_id_from_str_invalid() {
        assert!("t9".parse::<StatementId>().is_err());
        assert!("9-1".parse::<StatementId>().is_err());
    }

    #[test]
    fn test_id_roundtrip() {
        let original = StatementId::new(CategoryId::new(5), 4);
        let serialized = original.to_string();
        let deserialized: StatementId = serialized.parse().unwrap();
        assert_eq!(original, deserialized);
    }
}

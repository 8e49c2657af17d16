use thiserror::Error;

/// Errors that can occur when converting raw scale input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error("invalid agreement value: {0} (expected 1-5)")]
    InvalidValue(u8),
}

/// Five-level agreement rating for quiz statements.
///
/// An unanswered statement has no `ScaleValue` at all; absence from the
/// response map is the only "unanswered" representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScaleValue {
    StronglyDisagree,
    Disagree,
    Neutral,
    Agree,
    StronglyAgree,
}

impl ScaleValue {
    /// All options in display order, lowest agreement first.
    pub const ALL: [Self; 5] = [
        Self::StronglyDisagree,
        Self::Disagree,
        Self::Neutral,
        Self::Agree,
        Self::StronglyAgree,
    ];

    /// Converts a numeric rating (1-5) to a `ScaleValue`.
    ///
    /// # Errors
    ///
    /// Returns `ScaleError::InvalidValue` if the value is not in the range 1-5.
    pub fn from_u8(value: u8) -> Result<Self, ScaleError> {
        match value {
            1 => Ok(Self::StronglyDisagree),
            2 => Ok(Self::Disagree),
            3 => Ok(Self::Neutral),
            4 => Ok(Self::Agree),
            5 => Ok(Self::StronglyAgree),
            _ => Err(ScaleError::InvalidValue(value)),
        }
    }

    /// The numeric rating this value contributes to a category total.
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Self::StronglyDisagree => 1,
            Self::Disagree => 2,
            Self::Neutral => 3,
            Self::Agree => 4,
            Self::StronglyAgree => 5,
        }
    }

    /// Display label shown next to the numeric value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::StronglyDisagree => "Strongly disagree",
            Self::Disagree => "Disagree",
            Self::Neutral => "Neutral",
            Self::Agree => "Agree",
            Self::StronglyAgree => "Strongly agree",
        }
    }
}

//! Static descriptive profiles for each personality category.
//!
//! These records mirror the profile content document one-to-one; optional
//! sub-fields are absent for some categories and render conditionally.

use serde::{Deserialize, Serialize};

/// Center of intelligence a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Center {
    Body,
    Heart,
    Head,
}

impl Center {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Body => "Body",
            Self::Heart => "Heart",
            Self::Head => "Head",
        }
    }
}

/// Social stance grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stance {
    Assertive,
    Compliant,
    Withdrawn,
}

impl Stance {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Assertive => "Assertive",
            Self::Compliant => "Compliant",
            Self::Withdrawn => "Withdrawn",
        }
    }
}

/// Harmonic grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Harmony {
    Positive,
    Competency,
    Reactive,
}

impl Harmony {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Competency => "Competency",
            Self::Reactive => "Reactive",
        }
    }
}

/// Health band for a development level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    Healthy,
    Average,
    Unhealthy,
}

impl Band {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Average => "Average",
            Self::Unhealthy => "Unhealthy",
        }
    }

    /// Lowercase form used as a CSS class suffix.
    #[must_use]
    pub fn css_suffix(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Average => "average",
            Self::Unhealthy => "unhealthy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreSummary {
    pub one_liner: String,
    pub short_paragraph: String,
    pub core_motivation: String,
    pub core_fear: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dynamics {
    pub passion: String,
    pub fixation: String,
    pub virtue: String,
    pub holy_idea: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    pub center_description: String,
    pub stance: Option<Stance>,
    pub harmony: Option<Harmony>,
    pub object_relation: Option<String>,
}

/// Stress and growth connections to other categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrows {
    pub stress_point: u8,
    pub growth_point: u8,
    pub stress_description: String,
    pub growth_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wings {
    pub left_wing: u8,
    pub right_wing: u8,
    pub description_left: String,
    pub description_right: String,
}

/// One of the three instinctual-variant sub-profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstinctVariant {
    pub nickname: String,
    pub description: String,
    pub focus: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instincts {
    pub self_pres: InstinctVariant,
    pub social: InstinctVariant,
    pub sexual: InstinctVariant,
    pub overview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDetail {
    pub level: u8,
    pub band: Band,
    pub label: String,
    pub summary: String,
    pub inner_world: String,
    pub outer_behavior: String,
    pub markers: Vec<String>,
    pub growth_notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelsOfDevelopment {
    pub overview: String,
    pub levels: Vec<LevelDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patterns {
    pub strengths: Vec<String>,
    pub pitfalls: Vec<String>,
    pub typical_childhood_story: Option<String>,
    pub common_mistypings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPractices {
    pub inner_work: Vec<String>,
    pub relational_practices: Vec<String>,
    pub somatic_practices: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationships {
    pub what_others_appreciate: Vec<String>,
    pub what_others_struggle_with: Vec<String>,
    pub notes_for_partners_friends: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FurtherReading {
    pub naranjo_chapters: Option<Vec<String>>,
    pub chestnut_sections: Option<Vec<String>>,
    pub riso_sections: Option<Vec<String>>,
}

/// Rich static record describing one category, independent of any user's
/// responses. Joined to score entries by its numeric id at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProfile {
    pub id: u8,
    pub name: String,
    pub center: Center,
    pub instinct_triad: Option<String>,
    pub core_summary: CoreSummary,
    pub dynamics: Dynamics,
    pub structure: Structure,
    pub arrows: Arrows,
    pub wings: Wings,
    pub instincts: Instincts,
    pub levels_of_development: LevelsOfDevelopment,
    pub patterns: Patterns,
    pub growth_practices: GrowthPractices,
    pub relationships: Relationships,
    #[serde(default)]
    pub further_reading: FurtherReading,
}

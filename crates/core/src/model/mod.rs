mod category;
mod ids;
pub mod profile;
mod scale;
mod statement;

pub use category::Category;
pub use ids::{CategoryId, ParseIdError, StatementId};
pub use profile::{
    Arrows, Band, Center, CategoryProfile, CoreSummary, Dynamics, FurtherReading, GrowthPractices,
    Harmony, InstinctVariant, Instincts, LevelDetail, LevelsOfDevelopment, Patterns, Relationships,
    Stance, Structure, Wings,
};
pub use scale::{ScaleError, ScaleValue};
pub use statement::Statement;

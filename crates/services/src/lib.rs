#![forbid(unsafe_code)]

pub mod report;
pub mod session;

pub use report::{Report, ReportEntry, build_report};
pub use session::{AdvanceOutcome, Phase, QuizSession};

mod assessment_vm;
mod report_vm;

pub use assessment_vm::{progress_label, progress_percent};
pub use report_vm::{profile_heading, score_line};

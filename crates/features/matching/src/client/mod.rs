mod grade_input;
mod report;
mod universities;

pub use grade_input::GradeInput;
pub use report::{MatchReportView, PREVIEW_LEN};
pub use universities::Universities;

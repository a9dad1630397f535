pub mod exam_config;
pub mod exam_result;
pub mod grading;
pub mod student;
pub use exam_config::ExamConfig;
pub use exam_result::{ExamResult, ExamType, ExamView, SubjectScore};
pub use grading::{Classification, GradeBand, GradeScale, LetterGrade, TermSlot};
pub use student::Student;

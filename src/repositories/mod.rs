pub mod exam_result_repository;
pub mod student_repository;

pub use exam_result_repository::{ExamResultRepository, MongoExamResultRepository};
pub use student_repository::{MongoStudentRepository, StudentRepository};

#[cfg(test)]
pub use exam_result_repository::MockExamResultRepository;
#[cfg(test)]
pub use student_repository::MockStudentRepository;

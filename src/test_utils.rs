use crate::models::domain::{ExamResult, ExamType, Student, SubjectScore};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub const SCHOOL_ID: &str = "school-1";
    pub const CLASSROOM: &str = "Form 1";
    pub const ACADEMIC_YEAR: &str = "2024-2025";

    /// One sitting in the default school, classroom and year.
    pub fn exam_result(student_id: &str, exam_type: ExamType, scores: &[(&str, f64)]) -> ExamResult {
        ExamResult::new(
            SCHOOL_ID,
            student_id,
            &format!("Name {}", student_id),
            "class-1",
            CLASSROOM,
            ACADEMIC_YEAR,
            exam_type,
            scores
                .iter()
                .map(|(name, score)| SubjectScore::new(name, *score))
                .collect(),
        )
    }

    pub fn roster_student(student_id: &str, full_name: &str) -> Student {
        Student::new(SCHOOL_ID, student_id, full_name, CLASSROOM)
    }

    pub fn test_roster() -> Vec<Student> {
        vec![
            roster_student("stu-a", "Ayaan Abdi"),
            roster_student("stu-b", "Bashir Omar"),
            roster_student("stu-c", "Cawo Nur"),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use crate::models::domain::ExamType;
    use actix_web::http::StatusCode;

    #[test]
    fn test_fixtures_exam_result_totals() {
        let result = exam_result("stu-a", ExamType::MidExam, &[("REL", 40.0), ("ENG", 30.0)]);
        assert_eq!(result.total_score, 70.0);
        assert_eq!(result.average_score, 35.0);
        assert_eq!(result.classroom_name, CLASSROOM);
    }

    #[test]
    fn test_fixtures_test_roster() {
        let roster = test_roster();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].student_app_id, "stu-a");
        assert_eq!(roster[2].grade_applying_for, CLASSROOM);
    }

    #[test]
    fn test_status_helpers() {
        assert_success_status(StatusCode::CREATED);
        assert_error_status(StatusCode::NOT_FOUND);
    }
}

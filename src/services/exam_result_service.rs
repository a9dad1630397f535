use std::{collections::HashSet, sync::Arc};

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::ExamResult, dto::request::RecordExamResultRequest},
    repositories::ExamResultRepository,
};

pub struct ExamResultService {
    repository: Arc<dyn ExamResultRepository>,
}

impl ExamResultService {
    pub fn new(repository: Arc<dyn ExamResultRepository>) -> Self {
        Self { repository }
    }

    /// Records one sitting, replacing any earlier record for the same
    /// student, year and exam type.
    pub async fn record(&self, request: RecordExamResultRequest) -> AppResult<ExamResult> {
        request.validate()?;

        let mut seen = HashSet::new();
        for subject in &request.subjects {
            if !subject.score.is_finite() {
                return Err(AppError::ValidationError(format!(
                    "Score for '{}' must be a finite number",
                    subject.subject_name
                )));
            }
            if !seen.insert(subject.subject_name.to_lowercase()) {
                return Err(AppError::ValidationError(format!(
                    "Subject '{}' appears more than once",
                    subject.subject_name
                )));
            }
        }

        let existing = self
            .repository
            .find_for_student(&request.student_id, &request.school_id)
            .await?
            .into_iter()
            .rev()
            .find(|r| r.academic_year == request.academic_year && r.exam_type == request.exam_type);

        let mut result = ExamResult::new(
            &request.school_id,
            &request.student_id,
            &request.student_name,
            &request.classroom_id,
            &request.classroom_name,
            &request.academic_year,
            request.exam_type,
            request.subjects.into_iter().map(Into::into).collect(),
        );

        if let Some(existing) = existing {
            log::info!(
                "Replacing {} result {} for student {} ({})",
                result.exam_type,
                existing.id,
                result.student_id,
                result.academic_year
            );
            result.id = existing.id;
        }

        self.repository.upsert(result).await
    }

    pub async fn student_results(
        &self,
        school_id: &str,
        student_id: &str,
    ) -> AppResult<Vec<ExamResult>> {
        self.repository.find_for_student(student_id, school_id).await
    }
}

use async_graphql::ErrorExtensions;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{ExamType, ExamView},
        dto::request::ACADEMIC_YEAR_REGEX,
    },
};

/// Carries the error code into the GraphQL `extensions` field.
pub fn to_graphql_error(err: AppError) -> async_graphql::Error {
    err.extend()
}

pub fn validate_academic_year(academic_year: &str) -> AppResult<()> {
    if !ACADEMIC_YEAR_REGEX.is_match(academic_year) {
        return Err(AppError::ValidationError(format!(
            "Academic year must look like 2024-2025, got '{}'",
            academic_year
        )));
    }
    Ok(())
}

/// No exam type selects the yearly total.
pub fn exam_view(exam_type: Option<ExamType>) -> ExamView {
    exam_type.map_or(ExamView::YearlyTotal, ExamView::Single)
}

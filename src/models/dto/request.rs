use async_graphql::InputObject;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ExamType, SubjectScore};

pub static ACADEMIC_YEAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{4}$").expect("ACADEMIC_YEAR_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Deserialize, Serialize, Validate, InputObject)]
pub struct SubjectScoreInput {
    #[validate(length(min = 1, max = 50))]
    pub subject_name: String,

    #[validate(range(min = 0.0))]
    pub score: f64,
}

impl From<SubjectScoreInput> for SubjectScore {
    fn from(input: SubjectScoreInput) -> Self {
        SubjectScore {
            subject_name: input.subject_name,
            score: input.score,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct RecordExamResultRequest {
    #[validate(length(min = 1, max = 100))]
    pub school_id: String,

    #[validate(length(min = 1, max = 100))]
    pub student_id: String,

    #[validate(length(min = 1, max = 200))]
    pub student_name: String,

    #[validate(length(min = 1, max = 100))]
    pub classroom_id: String,

    #[validate(length(min = 1, max = 100))]
    pub classroom_name: String,

    #[validate(regex(
        path = *ACADEMIC_YEAR_REGEX,
        message = "Academic year must look like 2024-2025"
    ))]
    pub academic_year: String,

    pub exam_type: ExamType,

    #[validate(length(min = 1, message = "At least one subject score is required"), nested)]
    pub subjects: Vec<SubjectScoreInput>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AcademicYearQuery {
    #[validate(regex(path = *ACADEMIC_YEAR_REGEX))]
    pub academic_year: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RankingQuery {
    #[validate(regex(path = *ACADEMIC_YEAR_REGEX))]
    pub academic_year: String,

    pub exam_type: Option<String>, // omitted means the yearly total
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PrintAllQuery {
    #[validate(regex(path = *ACADEMIC_YEAR_REGEX))]
    pub academic_year: String,

    #[serde(default)]
    pub sort_by_rank: bool,
}

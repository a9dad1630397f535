use std::{fmt, str::FromStr};

use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

pub const YEARLY_EXAM_TOTAL: &str = "Yearly Exam Total";

/// Exam sittings a result can be recorded against. The yearly total is a
/// derived view and has no variant here.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, Enum,
)]
pub enum ExamType {
    #[serde(rename = "Monthly Exam 1")]
    MonthlyExam1,
    #[serde(rename = "Mid-Exam")]
    MidExam,
    #[serde(rename = "Monthly Exam 2")]
    MonthlyExam2,
    #[serde(rename = "Final Exam")]
    FinalExam,
}

impl ExamType {
    pub const ALL: [ExamType; 4] = [
        ExamType::MonthlyExam1,
        ExamType::MidExam,
        ExamType::MonthlyExam2,
        ExamType::FinalExam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::MonthlyExam1 => "Monthly Exam 1",
            ExamType::MidExam => "Mid-Exam",
            ExamType::MonthlyExam2 => "Monthly Exam 2",
            ExamType::FinalExam => "Final Exam",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ExamType::ALL
            .into_iter()
            .find(|exam_type| exam_type.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AppError::BadRequest(format!("Unknown exam type '{}'", s)))
    }
}

/// What a class list or report is computed over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamView {
    Single(ExamType),
    YearlyTotal,
}

impl ExamView {
    /// `None` and "Yearly Exam Total" both select the yearly view.
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::trim) {
            None | Some("") => Ok(ExamView::YearlyTotal),
            Some(v) if v.eq_ignore_ascii_case(YEARLY_EXAM_TOTAL) => Ok(ExamView::YearlyTotal),
            Some(v) => v.parse().map(ExamView::Single),
        }
    }
}

impl fmt::Display for ExamView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamView::Single(exam_type) => exam_type.fmt(f),
            ExamView::YearlyTotal => f.write_str(YEARLY_EXAM_TOTAL),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct SubjectScore {
    pub subject_name: String,
    pub score: f64,
}

impl SubjectScore {
    pub fn new(subject_name: &str, score: f64) -> Self {
        Self {
            subject_name: subject_name.to_string(),
            score,
        }
    }
}

/// One sitting for one student. Field names follow the documents written by
/// the grading workflow.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub id: String,
    pub school_id: String,
    pub student_id: String,
    pub student_name: String, // display only
    pub classroom_id: String,
    pub classroom_name: String,
    pub academic_year: String,
    pub exam_type: ExamType,
    pub subjects: Vec<SubjectScore>,
    pub total_score: f64,
    pub average_score: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl ExamResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        school_id: &str,
        student_id: &str,
        student_name: &str,
        classroom_id: &str,
        classroom_name: &str,
        academic_year: &str,
        exam_type: ExamType,
        subjects: Vec<SubjectScore>,
    ) -> Self {
        let (total_score, average_score) = Self::totals(&subjects);
        ExamResult {
            id: Uuid::new_v4().to_string(),
            school_id: school_id.to_string(),
            student_id: student_id.to_string(),
            student_name: student_name.to_string(),
            classroom_id: classroom_id.to_string(),
            classroom_name: classroom_name.to_string(),
            academic_year: academic_year.to_string(),
            exam_type,
            subjects,
            total_score,
            average_score,
            recorded_at: Some(Utc::now()),
        }
    }

    /// Sum and mean of the sitting's subject scores; `(0, 0)` when empty.
    pub fn totals(subjects: &[SubjectScore]) -> (f64, f64) {
        if subjects.is_empty() {
            return (0.0, 0.0);
        }
        let total: f64 = subjects.iter().map(|s| s.score).sum();
        (total, total / subjects.len() as f64)
    }
}

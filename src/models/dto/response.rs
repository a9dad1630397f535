use async_graphql::SimpleObject;
use serde::Serialize;

use crate::{
    constants::exam_defaults::MISSING_SCORE_PLACEHOLDER,
    models::domain::{Classification, ExamConfig, ExamType, GradeBand, LetterGrade, TermSlot},
    services::{RankedStudent, StudentReport, SubjectBreakdown},
};

/// Printable cell text: recorded scores without trailing zeros, "-" otherwise.
pub fn display_score(score: Option<f64>) -> String {
    match score {
        Some(value) => value.to_string(),
        None => MISSING_SCORE_PLACEHOLDER.to_string(),
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct SubjectRowCells {
    pub monthly1: String,
    pub midterm: String,
    pub term1_total: String,
    pub monthly2: String,
    #[serde(rename = "final")]
    pub final_exam: String,
    pub term2_total: String,
    pub total: String,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct SubjectRowDto {
    pub subject: String,
    pub monthly1: Option<f64>,
    pub midterm: Option<f64>,
    pub term1_total: f64,
    pub monthly2: Option<f64>,
    #[serde(rename = "final")]
    pub final_exam: Option<f64>,
    pub term2_total: f64,
    pub total: f64,
    pub grade: LetterGrade,
    pub remark: String,
    pub has_scores: bool,
    pub cells: SubjectRowCells,
}

impl From<SubjectBreakdown> for SubjectRowDto {
    fn from(row: SubjectBreakdown) -> Self {
        let b = row.breakdown;
        let has_scores = b.has_scores();
        let total_cell = |value: f64| display_score(has_scores.then_some(value));

        SubjectRowDto {
            cells: SubjectRowCells {
                monthly1: display_score(b.monthly1),
                midterm: display_score(b.midterm),
                term1_total: total_cell(b.term1_total),
                monthly2: display_score(b.monthly2),
                final_exam: display_score(b.final_exam),
                term2_total: total_cell(b.term2_total),
                total: total_cell(b.total),
            },
            subject: row.subject,
            monthly1: b.monthly1,
            midterm: b.midterm,
            term1_total: b.term1_total,
            monthly2: b.monthly2,
            final_exam: b.final_exam,
            term2_total: b.term2_total,
            total: b.total,
            grade: b.grade.grade,
            remark: b.grade.remark,
            has_scores,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct ReportCardDto {
    pub student_id: String,
    pub student_name: String,
    pub classroom_name: String,
    pub academic_year: String,
    pub subjects: Vec<SubjectRowDto>,
    pub grand_total: f64,
    pub average: f64,
    pub overall_percentage: f64,
    pub overall_grade: LetterGrade,
    pub overall_remark: String,
    pub rank: u32,
    pub class_size: u32,
    pub rank_label: String,
}

impl From<StudentReport> for ReportCardDto {
    fn from(report: StudentReport) -> Self {
        let rank_label = report.rank_label();
        let aggregate = report.aggregate;

        ReportCardDto {
            student_id: report.student_id,
            student_name: report.student_name,
            classroom_name: report.classroom_name,
            academic_year: report.academic_year,
            subjects: aggregate.subjects.into_iter().map(Into::into).collect(),
            grand_total: aggregate.grand_total,
            average: aggregate.average_per_subject,
            overall_percentage: aggregate.overall_percentage,
            overall_grade: aggregate.overall.grade,
            overall_remark: aggregate.overall.remark,
            rank: report.rank,
            class_size: report.class_size as u32,
            rank_label,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct ClassRankingDto {
    pub classroom_name: String,
    pub academic_year: String,
    pub exam_view: String,
    pub students: Vec<RankedStudent>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct ClassReportCardsDto {
    pub classroom_name: String,
    pub academic_year: String,
    pub sorted_by_rank: bool,
    pub reports: Vec<ReportCardDto>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct TermMappingDto {
    pub exam_type: ExamType,
    pub slot: TermSlot,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct ExamConfigDto {
    pub subjects: Vec<String>,
    pub term_mapping: Vec<TermMappingDto>,
    pub grade_bands: Vec<GradeBand>,
    pub fallback: Classification,
}

impl From<&ExamConfig> for ExamConfigDto {
    fn from(config: &ExamConfig) -> Self {
        ExamConfigDto {
            subjects: config.subjects.clone(),
            term_mapping: config
                .term_mapping
                .iter()
                .map(|(exam_type, slot)| TermMappingDto {
                    exam_type: *exam_type,
                    slot: *slot,
                })
                .collect(),
            grade_bands: config.grade_scale.bands.clone(),
            fallback: config.grade_scale.fallback.clone(),
        }
    }
}

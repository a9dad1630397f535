use std::sync::Arc;

use serde::Serialize;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ExamConfig, ExamResult, ExamType, ExamView, Student},
    repositories::{ExamResultRepository, StudentRepository},
    services::{
        rank_engine::{ClassRanking, RankCandidate, RankEngine},
        score_aggregator::{ScoreAggregator, StudentAggregate},
    },
};

/// A student's yearly aggregate together with their place in the class.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StudentReport {
    pub student_id: String,
    pub student_name: String,
    pub classroom_name: String,
    pub academic_year: String,
    pub aggregate: StudentAggregate,
    pub rank: u32,
    pub class_size: usize,
}

impl StudentReport {
    pub fn rank_label(&self) -> String {
        format!("{} of {}", self.rank, self.class_size)
    }
}

/// Every student of one classroom for one year, computed in a single pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassReports {
    pub classroom_name: String,
    pub academic_year: String,
    pub reports: Vec<StudentReport>, // roster order
    pub ranking: ClassRanking,
}

impl ClassReports {
    pub fn into_report(self, student_id: &str) -> Option<StudentReport> {
        self.reports.into_iter().find(|r| r.student_id == student_id)
    }

    pub fn into_rank_order(self) -> Vec<StudentReport> {
        let mut reports = self.reports;
        let mut ordered = Vec::with_capacity(reports.len());
        for ranked in self.ranking.students() {
            if let Some(index) = reports.iter().position(|r| r.student_id == ranked.student_id) {
                ordered.push(reports.swap_remove(index));
            }
        }
        ordered
    }
}

struct StudentResults {
    student_id: String,
    student_name: String,
    results: Vec<ExamResult>,
}

/// Roster students first, then anyone who only appears in the results, with
/// each student's records kept in fetch order.
fn group_by_student(roster: &[Student], results: Vec<ExamResult>) -> Vec<StudentResults> {
    let mut groups: Vec<StudentResults> = roster
        .iter()
        .map(|s| StudentResults {
            student_id: s.student_app_id.clone(),
            student_name: s.full_name.clone(),
            results: Vec::new(),
        })
        .collect();

    for result in results {
        match groups.iter_mut().find(|g| g.student_id == result.student_id) {
            Some(group) => group.results.push(result),
            None => groups.push(StudentResults {
                student_id: result.student_id.clone(),
                student_name: result.student_name.clone(),
                results: vec![result],
            }),
        }
    }

    groups
}

pub struct ReportService {
    exam_results: Arc<dyn ExamResultRepository>,
    students: Arc<dyn StudentRepository>,
    exam_config: Arc<ExamConfig>,
}

impl ReportService {
    pub fn new(
        exam_results: Arc<dyn ExamResultRepository>,
        students: Arc<dyn StudentRepository>,
        exam_config: Arc<ExamConfig>,
    ) -> Self {
        Self {
            exam_results,
            students,
            exam_config,
        }
    }

    pub fn exam_config(&self) -> &ExamConfig {
        &self.exam_config
    }

    /// Yearly view for a whole classroom. The report card and the bulk print
    /// list are both cut from this result.
    pub async fn class_reports(
        &self,
        school_id: &str,
        classroom_name: &str,
        academic_year: &str,
    ) -> AppResult<ClassReports> {
        let roster = self
            .students
            .find_by_classroom(school_id, classroom_name)
            .await?;
        let results: Vec<ExamResult> = self
            .exam_results
            .find_for_classroom(classroom_name, school_id, academic_year, None)
            .await?
            .into_iter()
            .filter(|r| r.academic_year == academic_year)
            .collect();

        let aggregator = ScoreAggregator::new(&self.exam_config);
        let aggregated: Vec<(String, String, StudentAggregate)> = group_by_student(&roster, results)
            .into_iter()
            .map(|group| {
                let aggregate = aggregator.aggregate(&group.results);
                (group.student_id, group.student_name, aggregate)
            })
            .collect();

        let ranking = RankEngine::rank(
            aggregated
                .iter()
                .map(|(id, name, aggregate)| RankCandidate::new(id, name, aggregate.grand_total))
                .collect(),
        );

        let class_size = ranking.len();
        let mut reports = Vec::with_capacity(aggregated.len());
        for (student_id, student_name, aggregate) in aggregated {
            let rank = ranking
                .find(&student_id)
                .map(|ranked| ranked.rank)
                .ok_or_else(|| {
                    AppError::InternalError(format!("Student '{}' missing from ranking", student_id))
                })?;
            reports.push(StudentReport {
                student_id,
                student_name,
                classroom_name: classroom_name.to_string(),
                academic_year: academic_year.to_string(),
                aggregate,
                rank,
                class_size,
            });
        }

        log::debug!(
            "Computed yearly reports for {} students in '{}' ({})",
            class_size,
            classroom_name,
            academic_year
        );

        Ok(ClassReports {
            classroom_name: classroom_name.to_string(),
            academic_year: academic_year.to_string(),
            reports,
            ranking,
        })
    }

    pub async fn class_ranking(
        &self,
        school_id: &str,
        classroom_name: &str,
        academic_year: &str,
        view: ExamView,
    ) -> AppResult<ClassRanking> {
        match view {
            ExamView::YearlyTotal => Ok(self
                .class_reports(school_id, classroom_name, academic_year)
                .await?
                .ranking),
            ExamView::Single(exam_type) => {
                self.exam_ranking(school_id, classroom_name, academic_year, exam_type)
                    .await
            }
        }
    }

    /// Single-sitting class list ranked by each record's stored total.
    pub async fn exam_ranking(
        &self,
        school_id: &str,
        classroom_name: &str,
        academic_year: &str,
        exam_type: ExamType,
    ) -> AppResult<ClassRanking> {
        let results = self
            .exam_results
            .find_for_classroom(classroom_name, school_id, academic_year, Some(exam_type))
            .await?;

        let mut candidates: Vec<RankCandidate> = Vec::new();
        for result in results
            .iter()
            .filter(|r| r.academic_year == academic_year && r.exam_type == exam_type)
        {
            let candidate =
                RankCandidate::new(&result.student_id, &result.student_name, result.total_score);
            match candidates
                .iter_mut()
                .find(|c| c.student_id == result.student_id)
            {
                Some(existing) => *existing = candidate,
                None => candidates.push(candidate),
            }
        }

        Ok(RankEngine::rank(candidates))
    }

    pub async fn report_card(
        &self,
        school_id: &str,
        student_id: &str,
        academic_year: &str,
    ) -> AppResult<StudentReport> {
        let classroom_name = self
            .classroom_for(school_id, student_id, academic_year)
            .await?;

        self.class_reports(school_id, &classroom_name, academic_year)
            .await?
            .into_report(student_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No report for student '{}' in {}",
                    student_id, academic_year
                ))
            })
    }

    pub async fn print_all(
        &self,
        school_id: &str,
        classroom_name: &str,
        academic_year: &str,
        sort_by_rank: bool,
    ) -> AppResult<Vec<StudentReport>> {
        let class = self
            .class_reports(school_id, classroom_name, academic_year)
            .await?;

        Ok(if sort_by_rank {
            class.into_rank_order()
        } else {
            class.reports
        })
    }

    /// Classroom the student sat that year's exams in; falls back to the
    /// current roster placement when nothing has been recorded yet.
    async fn classroom_for(
        &self,
        school_id: &str,
        student_id: &str,
        academic_year: &str,
    ) -> AppResult<String> {
        let own_results = self
            .exam_results
            .find_for_student(student_id, school_id)
            .await?;

        if let Some(latest) = own_results
            .iter()
            .rev()
            .find(|r| r.academic_year == academic_year)
        {
            return Ok(latest.classroom_name.clone());
        }

        self.students
            .find_by_app_id(school_id, student_id)
            .await?
            .map(|s| s.grade_applying_for)
            .ok_or_else(|| AppError::NotFound(format!("Student '{}' not found", student_id)))
    }
}

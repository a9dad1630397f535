use serde::Serialize;

use crate::{
    models::domain::{Classification, ExamConfig, ExamResult, TermSlot},
    services::grade_classifier::GradeClassifier,
};

/// One subject's row on the yearly report card. Components are `None` when no
/// score was recorded for that sitting; totals treat them as zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TermBreakdown {
    pub monthly1: Option<f64>,
    pub midterm: Option<f64>,
    pub term1_total: f64,
    pub monthly2: Option<f64>,
    #[serde(rename = "final")]
    pub final_exam: Option<f64>,
    pub term2_total: f64,
    pub total: f64,
    pub grade: Classification,
}

impl TermBreakdown {
    pub fn has_scores(&self) -> bool {
        self.monthly1.is_some()
            || self.midterm.is_some()
            || self.monthly2.is_some()
            || self.final_exam.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubjectBreakdown {
    pub subject: String,
    pub breakdown: TermBreakdown,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StudentAggregate {
    pub subjects: Vec<SubjectBreakdown>, // canonical order
    pub grand_total: f64,
    pub average_per_subject: f64,
    pub overall_percentage: f64,
    pub overall: Classification,
}

impl StudentAggregate {
    pub fn subject(&self, name: &str) -> Option<&TermBreakdown> {
        self.subjects
            .iter()
            .find(|s| s.subject.eq_ignore_ascii_case(name))
            .map(|s| &s.breakdown)
    }

    pub fn has_scores(&self) -> bool {
        self.subjects.iter().any(|s| s.breakdown.has_scores())
    }
}

#[derive(Clone, Copy, Default)]
struct SlotScores {
    monthly1: Option<f64>,
    midterm: Option<f64>,
    monthly2: Option<f64>,
    final_exam: Option<f64>,
}

impl SlotScores {
    fn cell_mut(&mut self, slot: TermSlot) -> &mut Option<f64> {
        match slot {
            TermSlot::Monthly1 => &mut self.monthly1,
            TermSlot::Midterm => &mut self.midterm,
            TermSlot::Monthly2 => &mut self.monthly2,
            TermSlot::Final => &mut self.final_exam,
        }
    }
}

pub struct ScoreAggregator<'a> {
    config: &'a ExamConfig,
}

impl<'a> ScoreAggregator<'a> {
    pub fn new(config: &'a ExamConfig) -> Self {
        Self { config }
    }

    /// Folds one student's results for a single academic year into per-subject
    /// term totals. Later records overwrite earlier ones for the same subject
    /// and sitting; subjects outside the canonical list are dropped.
    pub fn aggregate(&self, results: &[ExamResult]) -> StudentAggregate {
        let subjects = &self.config.subjects;

        let mut scores = vec![SlotScores::default(); subjects.len()];
        for result in results {
            let Some(slot) = self.config.slot_for(result.exam_type) else {
                continue;
            };
            for entry in &result.subjects {
                let Some(position) = self.config.subject_position(&entry.subject_name) else {
                    continue;
                };
                let previous = scores[position].cell_mut(slot).replace(entry.score);
                if previous.is_some() {
                    log::debug!(
                        "Overwriting {} score for {} of student {} with record {}",
                        result.exam_type,
                        subjects[position],
                        result.student_id,
                        result.id
                    );
                }
            }
        }

        let classifier = GradeClassifier::new(&self.config.grade_scale);
        let breakdowns: Vec<SubjectBreakdown> = subjects
            .iter()
            .zip(scores)
            .map(|(subject, slots)| {
                let term1_total = slots.monthly1.unwrap_or(0.0) + slots.midterm.unwrap_or(0.0);
                let term2_total = slots.monthly2.unwrap_or(0.0) + slots.final_exam.unwrap_or(0.0);
                let total = term1_total + term2_total;
                SubjectBreakdown {
                    subject: subject.clone(),
                    breakdown: TermBreakdown {
                        monthly1: slots.monthly1,
                        midterm: slots.midterm,
                        term1_total,
                        monthly2: slots.monthly2,
                        final_exam: slots.final_exam,
                        term2_total,
                        total,
                        // two terms are summed, so halve back onto 0..=100
                        grade: classifier.classify(total / 2.0),
                    },
                }
            })
            .collect();

        let grand_total: f64 = breakdowns.iter().map(|s| s.breakdown.total).sum();
        let (average_per_subject, overall_percentage) = if breakdowns.is_empty() {
            (0.0, 0.0)
        } else {
            let count = breakdowns.len() as f64;
            (grand_total / count, grand_total / (2.0 * count))
        };

        StudentAggregate {
            subjects: breakdowns,
            grand_total,
            average_per_subject,
            overall_percentage,
            overall: classifier.classify(overall_percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{ExamType, LetterGrade, SubjectScore};

    fn sitting(exam_type: ExamType, scores: &[(&str, f64)]) -> ExamResult {
        ExamResult::new(
            "school-1",
            "stu-1",
            "Amina Yusuf",
            "class-1",
            "Form 1",
            "2024-2025",
            exam_type,
            scores
                .iter()
                .map(|(name, score)| SubjectScore::new(name, *score))
                .collect(),
        )
    }

    fn full_year_rel() -> Vec<ExamResult> {
        vec![
            sitting(ExamType::MonthlyExam1, &[("REL", 18.0)]),
            sitting(ExamType::MidExam, &[("REL", 22.0)]),
            sitting(ExamType::MonthlyExam2, &[("REL", 19.0)]),
            sitting(ExamType::FinalExam, &[("REL", 25.0)]),
        ]
    }

    #[test]
    fn term_totals_add_up_across_sittings() {
        let config = ExamConfig::default();
        let aggregate = ScoreAggregator::new(&config).aggregate(&full_year_rel());
        let rel = aggregate.subject("REL").expect("REL is canonical");

        assert_eq!(rel.monthly1, Some(18.0));
        assert_eq!(rel.term1_total, 40.0);
        assert_eq!(rel.term2_total, 44.0);
        assert_eq!(rel.total, 84.0);
        // 84 / 2 = 42
        assert_eq!(rel.grade.grade, LetterGrade::F);
        assert_eq!(aggregate.grand_total, 84.0);
    }

    #[test]
    fn missing_sitting_counts_as_zero() {
        let config = ExamConfig::default();
        let results = vec![
            sitting(ExamType::MonthlyExam1, &[("ENG", 30.0)]),
            sitting(ExamType::FinalExam, &[("ENG", 45.0)]),
        ];
        let aggregate = ScoreAggregator::new(&config).aggregate(&results);
        let eng = aggregate.subject("ENG").expect("ENG is canonical");

        assert_eq!(eng.midterm, None);
        assert_eq!(eng.term1_total, 30.0);
        assert_eq!(eng.term2_total, 45.0);
        assert_eq!(eng.total, 75.0);
        assert!(eng.has_scores());
    }

    #[test]
    fn unknown_subjects_are_ignored_and_names_match_case_insensitively() {
        let config = ExamConfig::default();
        let results = vec![sitting(
            ExamType::MidExam,
            &[("math's", 70.0), ("Art", 99.0), ("somali", 50.0)],
        )];
        let aggregate = ScoreAggregator::new(&config).aggregate(&results);

        assert_eq!(aggregate.subject("MATH'S").map(|b| b.total), Some(70.0));
        assert_eq!(aggregate.subject("SOMALI").map(|b| b.total), Some(50.0));
        assert!(aggregate.subject("Art").is_none());
        assert_eq!(aggregate.grand_total, 120.0);
        assert_eq!(aggregate.subjects.len(), 10);
    }

    #[test]
    fn duplicate_sitting_records_overwrite_instead_of_summing() {
        let config = ExamConfig::default();
        let results = vec![
            sitting(ExamType::MidExam, &[("BIO", 40.0)]),
            sitting(ExamType::MidExam, &[("BIO", 55.0)]),
        ];
        let aggregate = ScoreAggregator::new(&config).aggregate(&results);
        let bio = aggregate.subject("BIO").expect("BIO is canonical");

        assert_eq!(bio.midterm, Some(55.0));
        assert_eq!(bio.total, 55.0);
    }

    #[test]
    fn no_results_yield_zero_totals_and_failing_overall() {
        let config = ExamConfig::default();
        let aggregate = ScoreAggregator::new(&config).aggregate(&[]);

        assert_eq!(aggregate.grand_total, 0.0);
        assert!(aggregate.subjects.iter().all(|s| s.breakdown.total == 0.0));
        assert!(!aggregate.has_scores());
        assert_eq!(aggregate.overall.grade, LetterGrade::F);
    }

    #[test]
    fn aggregation_is_repeatable() {
        let config = ExamConfig::default();
        let aggregator = ScoreAggregator::new(&config);
        let results = full_year_rel();

        assert_eq!(aggregator.aggregate(&results), aggregator.aggregate(&results));
    }

    #[test]
    fn overall_percentage_spreads_grand_total_over_subjects() {
        let config = ExamConfig::default().with_subjects(["MATH", "ENG"]);
        let results = vec![
            sitting(ExamType::MonthlyExam1, &[("MATH", 50.0), ("ENG", 40.0)]),
            sitting(ExamType::MidExam, &[("MATH", 50.0), ("ENG", 40.0)]),
            sitting(ExamType::MonthlyExam2, &[("MATH", 45.0), ("ENG", 40.0)]),
            sitting(ExamType::FinalExam, &[("MATH", 45.0), ("ENG", 40.0)]),
        ];
        let aggregate = ScoreAggregator::new(&config).aggregate(&results);

        assert_eq!(aggregate.grand_total, 350.0);
        assert_eq!(aggregate.average_per_subject, 175.0);
        assert_eq!(aggregate.overall_percentage, 87.5);
        assert_eq!(aggregate.overall.grade, LetterGrade::B);
    }

    #[test]
    fn unmapped_exam_types_do_not_contribute() {
        let mut config = ExamConfig::default();
        config.term_mapping.remove(&ExamType::MonthlyExam2);
        let results = vec![
            sitting(ExamType::MonthlyExam2, &[("HIS", 30.0)]),
            sitting(ExamType::FinalExam, &[("HIS", 35.0)]),
        ];
        let aggregate = ScoreAggregator::new(&config).aggregate(&results);

        assert_eq!(aggregate.subject("HIS").map(|b| b.term2_total), Some(35.0));
    }
}

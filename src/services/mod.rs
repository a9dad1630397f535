pub mod exam_result_service;
pub mod grade_classifier;
pub mod rank_engine;
pub mod report_service;
pub mod score_aggregator;

pub use exam_result_service::ExamResultService;
pub use grade_classifier::GradeClassifier;
pub use rank_engine::{ClassRanking, RankCandidate, RankEngine, RankedStudent};
pub use report_service::{ClassReports, ReportService, StudentReport};
pub use score_aggregator::{ScoreAggregator, StudentAggregate, SubjectBreakdown, TermBreakdown};

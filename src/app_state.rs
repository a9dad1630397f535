use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    models::domain::ExamConfig,
    repositories::{
        ExamResultRepository, MongoExamResultRepository, MongoStudentRepository, StudentRepository,
    },
    services::{ExamResultService, ReportService},
};

#[derive(Clone)]
pub struct AppState {
    pub report_service: Arc<ReportService>,
    pub exam_result_service: Arc<ExamResultService>,
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: &Config) -> AppResult<Self> {
        let exam_config = Arc::new(config.exam_config()?);
        log::info!(
            "Exam configuration: {} subjects, {} mapped exam types",
            exam_config.subjects.len(),
            exam_config.term_mapping.len()
        );

        let db = Database::connect(config).await?;

        let exam_results = Arc::new(MongoExamResultRepository::new(
            &db,
            &config.exam_results_collection,
        ));
        exam_results.ensure_indexes().await?;
        let students = Arc::new(MongoStudentRepository::new(&db, &config.students_collection));

        let mut state = Self::from_repositories(exam_results, students, exam_config);
        state.db = Some(db);
        Ok(state)
    }

    /// Wires services over any repository implementation; no database handle
    /// is attached.
    pub fn from_repositories(
        exam_results: Arc<dyn ExamResultRepository>,
        students: Arc<dyn StudentRepository>,
        exam_config: Arc<ExamConfig>,
    ) -> Self {
        let report_service = Arc::new(ReportService::new(
            exam_results.clone(),
            students,
            exam_config,
        ));
        let exam_result_service = Arc::new(ExamResultService::new(exam_results));

        Self {
            report_service,
            exam_result_service,
            db: None,
        }
    }
}

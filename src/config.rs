use std::{env, fs};

use secrecy::SecretString;

use crate::{
    errors::{AppError, AppResult},
    models::domain::ExamConfig,
};

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: String,
    pub exam_results_collection: String,
    pub students_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
    pub exam_config_path: Option<String>,
    pub exam_subjects: Option<String>, // comma separated override
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: SecretString::from(
                env::var("MONGO_CONN_STRING")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            ),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "school-local".to_string()),
            exam_results_collection: env::var("EXAM_RESULTS_COLLECTION")
                .unwrap_or_else(|_| "examResults".to_string()),
            students_collection: env::var("STUDENTS_COLLECTION")
                .unwrap_or_else(|_| "students".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
            exam_config_path: env::var("EXAM_CONFIG_PATH").ok(),
            exam_subjects: env::var("EXAM_SUBJECTS").ok(),
        }
    }

    /// Resolves the exam setup: defaults, then the JSON file if configured,
    /// then the subject list override.
    pub fn exam_config(&self) -> AppResult<ExamConfig> {
        let mut exam_config = match &self.exam_config_path {
            Some(path) => {
                log::info!("Loading exam configuration from {}", path);
                let raw = fs::read_to_string(path)?;
                ExamConfig::from_json(&raw)?
            }
            None => ExamConfig::default(),
        };

        if let Some(subjects) = &self.exam_subjects {
            let subjects: Vec<String> = subjects
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            exam_config = exam_config.with_subjects(subjects);
        }

        exam_config.validate()?;
        Ok(exam_config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.web_server_port == 0 {
            return Err(AppError::ValidationError(
                "WEB_SERVER_PORT must be a non-zero port".to_string(),
            ));
        }
        if self.exam_results_collection.trim().is_empty() || self.students_collection.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Collection names cannot be blank".to_string(),
            ));
        }
        Ok(())
    }

    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: SecretString::from("mongodb://localhost:27017".to_string()),
            mongo_db_name: "school-test".to_string(),
            exam_results_collection: "examResults".to_string(),
            students_collection: "students".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
            exam_config_path: None,
            exam_subjects: None,
        }
    }
}

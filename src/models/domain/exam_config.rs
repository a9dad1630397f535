use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{
    constants::exam_defaults::{DEFAULT_SUBJECTS, DEFAULT_TERM_MAPPING},
    errors::{AppError, AppResult},
    models::domain::{ExamType, GradeScale, TermSlot},
};

/// School-specific exam setup shared by the aggregator, classifier and rank
/// views. Missing keys in a JSON override fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExamConfig {
    pub subjects: Vec<String>,
    pub term_mapping: BTreeMap<ExamType, TermSlot>,
    pub grade_scale: GradeScale,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            subjects: DEFAULT_SUBJECTS.iter().map(|s| s.to_string()).collect(),
            term_mapping: DEFAULT_TERM_MAPPING.into_iter().collect(),
            grade_scale: GradeScale::default(),
        }
    }
}

impl ExamConfig {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let config: ExamConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = subjects.into_iter().map(Into::into).collect();
        self
    }

    pub fn slot_for(&self, exam_type: ExamType) -> Option<TermSlot> {
        self.term_mapping.get(&exam_type).copied()
    }

    /// Position of `name` in the canonical list, matched case-insensitively.
    pub fn subject_position(&self, name: &str) -> Option<usize> {
        let name = name.to_lowercase();
        self.subjects.iter().position(|s| s.to_lowercase() == name)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.subjects.is_empty() {
            return Err(AppError::ValidationError(
                "Exam config must list at least one subject".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for subject in &self.subjects {
            if subject.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "Subject names cannot be blank".to_string(),
                ));
            }
            if !seen.insert(subject.to_lowercase()) {
                return Err(AppError::ValidationError(format!(
                    "Subject '{}' is listed more than once",
                    subject
                )));
            }
        }

        let bands = &self.grade_scale.bands;
        if bands.iter().any(|b| !b.min_percentage.is_finite()) {
            return Err(AppError::ValidationError(
                "Grade band thresholds must be finite".to_string(),
            ));
        }
        if bands
            .windows(2)
            .any(|pair| pair[0].min_percentage <= pair[1].min_percentage)
        {
            return Err(AppError::ValidationError(
                "Grade bands must be ordered from highest to lowest threshold".to_string(),
            ));
        }

        Ok(())
    }
}

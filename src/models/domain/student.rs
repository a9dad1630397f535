use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// Roster entry as kept by the admissions side of the application.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_app_id: String,
    pub full_name: String,
    pub grade_applying_for: String, // classroom name
    pub school_id: String,
}

impl Student {
    pub fn new(school_id: &str, student_app_id: &str, full_name: &str, classroom: &str) -> Self {
        Student {
            student_app_id: student_app_id.to_string(),
            full_name: full_name.to_string(),
            grade_applying_for: classroom.to_string(),
            school_id: school_id.to_string(),
        }
    }
}

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use school_exam_server::{
    errors::AppResult,
    models::domain::{ExamResult, ExamType, Student, SubjectScore},
    repositories::{ExamResultRepository, StudentRepository},
};

pub const SCHOOL_ID: &str = "school-1";
pub const CLASSROOM: &str = "Form 1";
pub const ACADEMIC_YEAR: &str = "2024-2025";

/// Keeps write order; rewriting a sitting moves it to the end, as the Mongo
/// repository's `recordedAt` ordering does.
#[derive(Default)]
pub struct InMemoryExamResultRepository {
    results: Arc<RwLock<Vec<ExamResult>>>,
}

impl InMemoryExamResultRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.results.read().await.len()
    }
}

fn same_sitting(a: &ExamResult, b: &ExamResult) -> bool {
    a.school_id == b.school_id
        && a.student_id == b.student_id
        && a.academic_year == b.academic_year
        && a.exam_type == b.exam_type
}

#[async_trait]
impl ExamResultRepository for InMemoryExamResultRepository {
    async fn find_for_classroom(
        &self,
        classroom_name: &str,
        school_id: &str,
        academic_year: &str,
        exam_type: Option<ExamType>,
    ) -> AppResult<Vec<ExamResult>> {
        let results = self.results.read().await;
        Ok(results
            .iter()
            .filter(|r| {
                r.school_id == school_id
                    && r.classroom_name == classroom_name
                    && r.academic_year == academic_year
                    && exam_type.map_or(true, |t| r.exam_type == t)
            })
            .cloned()
            .collect())
    }

    async fn find_for_student(
        &self,
        student_id: &str,
        school_id: &str,
    ) -> AppResult<Vec<ExamResult>> {
        let results = self.results.read().await;
        Ok(results
            .iter()
            .filter(|r| r.school_id == school_id && r.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn upsert(&self, result: ExamResult) -> AppResult<ExamResult> {
        let mut results = self.results.write().await;
        results.retain(|r| !same_sitting(r, &result));
        results.push(result.clone());
        Ok(result)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: Arc<RwLock<Vec<Student>>>,
}

impl InMemoryStudentRepository {
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: Arc::new(RwLock::new(students)),
        }
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_by_classroom(
        &self,
        school_id: &str,
        classroom_name: &str,
    ) -> AppResult<Vec<Student>> {
        let students = self.students.read().await;
        let mut roster: Vec<Student> = students
            .iter()
            .filter(|s| s.school_id == school_id && s.grade_applying_for == classroom_name)
            .cloned()
            .collect();
        roster.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(roster)
    }

    async fn find_by_app_id(
        &self,
        school_id: &str,
        student_app_id: &str,
    ) -> AppResult<Option<Student>> {
        let students = self.students.read().await;
        Ok(students
            .iter()
            .find(|s| s.school_id == school_id && s.student_app_id == student_app_id)
            .cloned())
    }
}

pub fn roster() -> Vec<Student> {
    vec![
        Student::new(SCHOOL_ID, "stu-a", "Ayaan Abdi", CLASSROOM),
        Student::new(SCHOOL_ID, "stu-b", "Bashir Omar", CLASSROOM),
        Student::new(SCHOOL_ID, "stu-c", "Cawo Nur", CLASSROOM),
    ]
}

pub fn sitting(student_id: &str, exam_type: ExamType, scores: &[(&str, f64)]) -> ExamResult {
    ExamResult::new(
        SCHOOL_ID,
        student_id,
        &format!("Name {}", student_id),
        "class-1",
        CLASSROOM,
        ACADEMIC_YEAR,
        exam_type,
        scores
            .iter()
            .map(|(name, score)| SubjectScore::new(name, *score))
            .collect(),
    )
}

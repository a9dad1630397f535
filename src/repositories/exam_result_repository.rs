use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{IndexOptions, ReplaceOptions},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{ExamResult, ExamType},
};

/// Results come back oldest write first, so a caller folding them in order
/// ends up with the latest write for any duplicated sitting.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExamResultRepository: Send + Sync {
    async fn find_for_classroom(
        &self,
        classroom_name: &str,
        school_id: &str,
        academic_year: &str,
        exam_type: Option<ExamType>,
    ) -> AppResult<Vec<ExamResult>>;
    async fn find_for_student(&self, student_id: &str, school_id: &str)
        -> AppResult<Vec<ExamResult>>;
    async fn upsert(&self, result: ExamResult) -> AppResult<ExamResult>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoExamResultRepository {
    collection: Collection<ExamResult>,
}

impl MongoExamResultRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    fn sitting_filter(result: &ExamResult) -> Document {
        doc! {
            "schoolId": &result.school_id,
            "studentId": &result.student_id,
            "academicYear": &result.academic_year,
            "examType": result.exam_type.as_str(),
        }
    }

    async fn find_sorted(&self, filter: Document) -> AppResult<Vec<ExamResult>> {
        let results = self
            .collection
            .find(filter)
            .sort(doc! { "recordedAt": 1, "id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(results)
    }
}

#[async_trait]
impl ExamResultRepository for MongoExamResultRepository {
    async fn find_for_classroom(
        &self,
        classroom_name: &str,
        school_id: &str,
        academic_year: &str,
        exam_type: Option<ExamType>,
    ) -> AppResult<Vec<ExamResult>> {
        let mut filter = doc! {
            "schoolId": school_id,
            "classroomName": classroom_name,
            "academicYear": academic_year,
        };

        if let Some(exam_type) = exam_type {
            filter.insert("examType", exam_type.as_str());
        }

        self.find_sorted(filter).await
    }

    async fn find_for_student(
        &self,
        student_id: &str,
        school_id: &str,
    ) -> AppResult<Vec<ExamResult>> {
        self.find_sorted(doc! { "schoolId": school_id, "studentId": student_id })
            .await
    }

    async fn upsert(&self, result: ExamResult) -> AppResult<ExamResult> {
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(Self::sitting_filter(&result), &result)
            .with_options(options)
            .await?;

        Ok(result)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for exam results collection");

        let sitting_index = IndexModel::builder()
            .keys(doc! { "schoolId": 1, "studentId": 1, "academicYear": 1, "examType": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("student_sitting_unique".to_string())
                    .build(),
            )
            .build();

        let classroom_index = IndexModel::builder()
            .keys(doc! { "schoolId": 1, "classroomName": 1, "academicYear": 1 })
            .options(
                IndexOptions::builder()
                    .name("classroom_year".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(sitting_index).await?;
        self.collection.create_index(classroom_index).await?;

        log::info!("Successfully created indexes for exam results collection");
        Ok(())
    }
}

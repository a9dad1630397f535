use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Student};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_by_classroom(
        &self,
        school_id: &str,
        classroom_name: &str,
    ) -> AppResult<Vec<Student>>;
    async fn find_by_app_id(
        &self,
        school_id: &str,
        student_app_id: &str,
    ) -> AppResult<Option<Student>>;
}

/// Read-only view over the roster collection owned by admissions.
pub struct MongoStudentRepository {
    collection: Collection<Student>,
}

impl MongoStudentRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl StudentRepository for MongoStudentRepository {
    async fn find_by_classroom(
        &self,
        school_id: &str,
        classroom_name: &str,
    ) -> AppResult<Vec<Student>> {
        let students = self
            .collection
            .find(doc! { "schoolId": school_id, "gradeApplyingFor": classroom_name })
            .sort(doc! { "fullName": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(students)
    }

    async fn find_by_app_id(
        &self,
        school_id: &str,
        student_app_id: &str,
    ) -> AppResult<Option<Student>> {
        let student = self
            .collection
            .find_one(doc! { "schoolId": school_id, "studentAppId": student_app_id })
            .await?;
        Ok(student)
    }
}

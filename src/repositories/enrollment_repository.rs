use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Enrollment};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn create(&self, enrollment: Enrollment) -> AppResult<Enrollment>;
    async fn find_for_user(&self, user_id: &str) -> AppResult<Vec<Enrollment>>;
    async fn find_for_course(&self, course_id: &str) -> AppResult<Vec<Enrollment>>;
    async fn delete(&self, user_id: &str, course_id: &str) -> AppResult<bool>;
    /// Removes every enrollment of a course (course deletion cascade).
    async fn delete_for_course(&self, course_id: &str) -> AppResult<u64>;
}

pub struct MongoEnrollmentRepository {
    collection: Collection<Enrollment>,
}

impl MongoEnrollmentRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("enrollments");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for enrollments collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        Ok(())
    }
}

#[async_trait]
impl EnrollmentRepository for MongoEnrollmentRepository {
    async fn create(&self, enrollment: Enrollment) -> AppResult<Enrollment> {
        self.collection.insert_one(&enrollment).await?;
        Ok(enrollment)
    }

    async fn find_for_user(&self, user_id: &str) -> AppResult<Vec<Enrollment>> {
        let enrollments = self
            .collection
            .find(doc! { "user": user_id })
            .await?
            .try_collect()
            .await?;
        Ok(enrollments)
    }

    async fn find_for_course(&self, course_id: &str) -> AppResult<Vec<Enrollment>> {
        let enrollments = self
            .collection
            .find(doc! { "course": course_id })
            .await?
            .try_collect()
            .await?;
        Ok(enrollments)
    }

    async fn delete(&self, user_id: &str, course_id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "user": user_id, "course": course_id })
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn delete_for_course(&self, course_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! { "course": course_id })
            .await?;
        Ok(result.deleted_count)
    }
}

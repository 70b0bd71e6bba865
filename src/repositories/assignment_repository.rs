use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Assignment};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<Assignment>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Assignment>>;
    async fn create(&self, assignment: Assignment) -> AppResult<Assignment>;
    async fn save(&self, assignment: Assignment) -> AppResult<Assignment>;
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

pub struct MongoAssignmentRepository {
    collection: Collection<Assignment>,
}

impl MongoAssignmentRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("assignments");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for assignments collection");

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
impl AssignmentRepository for MongoAssignmentRepository {
    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<Assignment>> {
        let assignments = self
            .collection
            .find(doc! { "course": course_id })
            .await?
            .try_collect()
            .await?;
        Ok(assignments)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Assignment>> {
        let assignment = self.collection.find_one(doc! { "id": id }).await?;
        Ok(assignment)
    }

    async fn create(&self, assignment: Assignment) -> AppResult<Assignment> {
        self.collection.insert_one(&assignment).await?;
        Ok(assignment)
    }

    async fn save(&self, assignment: Assignment) -> AppResult<Assignment> {
        self.collection
            .replace_one(doc! { "id": &assignment.id }, &assignment)
            .await?;
        Ok(assignment)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

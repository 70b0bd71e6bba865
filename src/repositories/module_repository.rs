use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::CourseModule};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModuleRepository: Send + Sync {
    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<CourseModule>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<CourseModule>>;
    async fn create(&self, module: CourseModule) -> AppResult<CourseModule>;
    async fn save(&self, module: CourseModule) -> AppResult<CourseModule>;
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

pub struct MongoModuleRepository {
    collection: Collection<CourseModule>,
}

impl MongoModuleRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("modules");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for modules collection");

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
impl ModuleRepository for MongoModuleRepository {
    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<CourseModule>> {
        let modules = self
            .collection
            .find(doc! { "course": course_id })
            .await?
            .try_collect()
            .await?;
        Ok(modules)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<CourseModule>> {
        let module = self.collection.find_one(doc! { "id": id }).await?;
        Ok(module)
    }

    async fn create(&self, module: CourseModule) -> AppResult<CourseModule> {
        self.collection.insert_one(&module).await?;
        Ok(module)
    }

    async fn save(&self, module: CourseModule) -> AppResult<CourseModule> {
        self.collection
            .replace_one(doc! { "id": &module.id }, &module)
            .await?;
        Ok(module)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

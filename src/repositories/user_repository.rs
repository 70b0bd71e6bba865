use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{User, UserRole},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> AppResult<User>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn find_by_credentials(
        &self,
        username: &str,
        password_digest: &str,
    ) -> AppResult<Option<User>>;
    async fn find_all(&self) -> AppResult<Vec<User>>;
    async fn find_by_role(&self, role: UserRole) -> AppResult<Vec<User>>;
    /// Case-insensitive substring match on first or last name.
    async fn find_by_partial_name(&self, partial: &str) -> AppResult<Vec<User>>;
    async fn save(&self, user: User) -> AppResult<User>;
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("users");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for users collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(username_index).await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        self.collection.insert_one(&user).await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let user = self.collection.find_one(doc! { "id": id }).await?;
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = self
            .collection
            .find_one(doc! { "username": username })
            .await?;
        Ok(user)
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password_digest: &str,
    ) -> AppResult<Option<User>> {
        let user = self
            .collection
            .find_one(doc! { "username": username, "passwordDigest": password_digest })
            .await?;
        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(users)
    }

    async fn find_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        let role_value = mongodb::bson::to_bson(&role)?;
        let users = self
            .collection
            .find(doc! { "role": role_value })
            .await?
            .try_collect()
            .await?;
        Ok(users)
    }

    async fn find_by_partial_name(&self, partial: &str) -> AppResult<Vec<User>> {
        let escaped = regex::escape(partial);
        let users = self
            .collection
            .find(doc! {
                "$or": [
                    { "firstName": { "$regex": &escaped, "$options": "i" } },
                    { "lastName": { "$regex": &escaped, "$options": "i" } },
                ]
            })
            .await?
            .try_collect()
            .await?;
        Ok(users)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        self.collection
            .replace_one(doc! { "id": &user.id }, &user)
            .await?;
        Ok(user)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

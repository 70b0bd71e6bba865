use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::QuizAttempt};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizAttemptRepository: Send + Sync {
    /// Inserts a new attempt. The unique (quiz, student, attemptNumber)
    /// index rejects a duplicate created by a racing start call; the
    /// resulting write error surfaces as `AppError::Conflict`.
    async fn create(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizAttempt>>;
    /// A student's attempts on a quiz, highest attempt number first.
    async fn find_by_student_and_quiz(
        &self,
        student_id: &str,
        quiz_id: &str,
    ) -> AppResult<Vec<QuizAttempt>>;
    async fn find_latest(&self, student_id: &str, quiz_id: &str)
        -> AppResult<Option<QuizAttempt>>;
    async fn count_by_student_and_quiz(&self, student_id: &str, quiz_id: &str) -> AppResult<u64>;
    /// Every attempt on a quiz across all students, newest submission
    /// first (faculty view).
    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizAttempt>>;
    async fn save(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt>;
}

pub struct MongoQuizAttemptRepository {
    collection: Collection<QuizAttempt>,
}

impl MongoQuizAttemptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_attempts");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_attempts collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        // The sole safety net for the count-then-create race in the
        // attempt lifecycle manager.
        let attempt_number_index = IndexModel::builder()
            .keys(doc! { "quiz": 1, "student": 1, "attemptNumber": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("quiz_student_attempt_unique".to_string())
                    .build(),
            )
            .build();

        let student_quiz_index = IndexModel::builder()
            .keys(doc! { "student": 1, "quiz": 1 })
            .options(
                IndexOptions::builder()
                    .name("student_quiz".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(attempt_number_index).await?;
        self.collection.create_index(student_quiz_index).await?;

        Ok(())
    }
}

#[async_trait]
impl QuizAttemptRepository for MongoQuizAttemptRepository {
    async fn create(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        self.collection.insert_one(&attempt).await?;
        Ok(attempt)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizAttempt>> {
        let attempt = self.collection.find_one(doc! { "id": id }).await?;
        Ok(attempt)
    }

    async fn find_by_student_and_quiz(
        &self,
        student_id: &str,
        quiz_id: &str,
    ) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self
            .collection
            .find(doc! { "student": student_id, "quiz": quiz_id })
            .sort(doc! { "attemptNumber": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(attempts)
    }

    async fn find_latest(
        &self,
        student_id: &str,
        quiz_id: &str,
    ) -> AppResult<Option<QuizAttempt>> {
        let attempt = self
            .collection
            .find_one(doc! { "student": student_id, "quiz": quiz_id })
            .sort(doc! { "attemptNumber": -1 })
            .await?;
        Ok(attempt)
    }

    async fn count_by_student_and_quiz(&self, student_id: &str, quiz_id: &str) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! { "student": student_id, "quiz": quiz_id })
            .await?;
        Ok(count)
    }

    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self
            .collection
            .find(doc! { "quiz": quiz_id })
            .sort(doc! { "submittedAt": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(attempts)
    }

    async fn save(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        self.collection
            .replace_one(doc! { "id": &attempt.id }, &attempt)
            .await?;
        Ok(attempt)
    }
}

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::{
    auth::{require_faculty, Claims},
    errors::{AppError, AppResult},
    models::domain::{Question, Quiz, UserRole},
    models::dto::request::{
        CreateQuestionRequest, CreateQuizRequest, QuestionUpdate, UpdateQuizRequest,
    },
    models::dto::response::StudentQuizView,
    repositories::{QuizAttemptRepository, QuizRepository},
};

/// Course quiz listing, shaped by the caller's role.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CourseQuizzes {
    /// Faculty see everything, including unpublished quizzes.
    Faculty(Vec<Quiz>),
    /// Students see published quizzes annotated with their own progress.
    Student(Vec<StudentQuizView>),
}

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    attempts: Arc<dyn QuizAttemptRepository>,
}

fn validate_question_points(questions: &[Question]) -> AppResult<()> {
    if questions.iter().any(|q| q.points < 0) {
        return Err(AppError::ValidationError(
            "Question points must not be negative".to_string(),
        ));
    }
    Ok(())
}

impl QuizService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, attempts: Arc<dyn QuizAttemptRepository>) -> Self {
        Self { quizzes, attempts }
    }

    async fn load_quiz(&self, quiz_id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))
    }

    pub async fn get_quiz(&self, quiz_id: &str) -> AppResult<Quiz> {
        self.load_quiz(quiz_id).await
    }

    pub async fn create_quiz(
        &self,
        claims: &Claims,
        course_id: &str,
        request: CreateQuizRequest,
    ) -> AppResult<Quiz> {
        require_faculty(claims)?;
        validate_question_points(&request.questions)?;
        let quiz = Quiz::from_create(course_id, request);
        self.quizzes.create(quiz).await
    }

    pub async fn update_quiz(
        &self,
        claims: &Claims,
        quiz_id: &str,
        patch: UpdateQuizRequest,
    ) -> AppResult<Quiz> {
        require_faculty(claims)?;
        if let Some(questions) = &patch.questions {
            validate_question_points(questions)?;
        }
        let mut quiz = self.load_quiz(quiz_id).await?;
        quiz.apply_update(patch);
        self.quizzes.save(quiz).await
    }

    pub async fn delete_quiz(&self, claims: &Claims, quiz_id: &str) -> AppResult<()> {
        require_faculty(claims)?;
        if !self.quizzes.delete(quiz_id).await? {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                quiz_id
            )));
        }
        Ok(())
    }

    pub async fn toggle_publish(&self, claims: &Claims, quiz_id: &str) -> AppResult<Quiz> {
        require_faculty(claims)?;
        let mut quiz = self.load_quiz(quiz_id).await?;
        quiz.toggle_published();
        self.quizzes.save(quiz).await
    }

    pub async fn add_question(
        &self,
        claims: &Claims,
        quiz_id: &str,
        request: CreateQuestionRequest,
    ) -> AppResult<Quiz> {
        require_faculty(claims)?;
        let mut quiz = self.load_quiz(quiz_id).await?;

        let question = Question {
            id: request.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            question_type: request.question_type,
            title: request.title,
            points: request.points,
            question: request.question,
            choices: request.choices,
            correct_answers: request.correct_answers,
        };
        if question.points < 0 {
            return Err(AppError::ValidationError(
                "Question points must not be negative".to_string(),
            ));
        }

        quiz.add_question(question);
        self.quizzes.save(quiz).await
    }

    pub async fn update_question(
        &self,
        claims: &Claims,
        quiz_id: &str,
        question_id: &str,
        patch: QuestionUpdate,
    ) -> AppResult<Quiz> {
        require_faculty(claims)?;
        if matches!(patch.points, Some(points) if points < 0) {
            return Err(AppError::ValidationError(
                "Question points must not be negative".to_string(),
            ));
        }

        let mut quiz = self.load_quiz(quiz_id).await?;
        if !quiz.update_question(question_id, patch) {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found in quiz '{}'",
                question_id, quiz_id
            )));
        }
        self.quizzes.save(quiz).await
    }

    pub async fn delete_question(
        &self,
        claims: &Claims,
        quiz_id: &str,
        question_id: &str,
    ) -> AppResult<Quiz> {
        require_faculty(claims)?;
        let mut quiz = self.load_quiz(quiz_id).await?;
        if quiz.remove_question(question_id).is_none() {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found in quiz '{}'",
                question_id, quiz_id
            )));
        }
        self.quizzes.save(quiz).await
    }

    /// The quiz half of the visibility filter: faculty get the raw
    /// catalog; students get published quizzes joined with their own
    /// latest score and attempt count.
    pub async fn quizzes_for_course(
        &self,
        claims: &Claims,
        course_id: &str,
    ) -> AppResult<CourseQuizzes> {
        let quizzes = self.quizzes.find_by_course(course_id).await?;

        if claims.role == UserRole::Faculty {
            return Ok(CourseQuizzes::Faculty(quizzes));
        }

        let mut views = Vec::new();
        for quiz in quizzes.into_iter().filter(|q| q.published) {
            let latest = self.attempts.find_latest(&claims.sub, &quiz.id).await?;
            let attempt_count = self
                .attempts
                .count_by_student_and_quiz(&claims.sub, &quiz.id)
                .await?;

            views.push(StudentQuizView {
                quiz,
                latest_score: latest.map(|a| a.score),
                attempt_count,
            });
        }

        Ok(CourseQuizzes::Student(views))
    }
}

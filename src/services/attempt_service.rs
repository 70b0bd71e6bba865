use std::sync::Arc;

use serde::Serialize;

use crate::{
    auth::{require_owner_or_faculty, Claims},
    errors::{AppError, AppResult},
    models::domain::{Answer, QuizAttempt, UserRole},
    models::dto::request::AnswerInput,
    models::dto::response::{AttemptWithStudent, StudentIdentity},
    repositories::{QuizAttemptRepository, QuizRepository, UserRepository},
    services::grading,
};

/// Attempt listing for a quiz, shaped by the caller's role.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuizAttempts {
    /// Faculty: all students' attempts, newest submission first.
    Faculty(Vec<AttemptWithStudent>),
    /// Student: own attempts, by descending attempt number.
    Student(Vec<QuizAttempt>),
}

/// Owns the attempt state machine (start → save progress → submit) and
/// the attempt half of the visibility filter.
pub struct AttemptService {
    attempts: Arc<dyn QuizAttemptRepository>,
    quizzes: Arc<dyn QuizRepository>,
    users: Arc<dyn UserRepository>,
}

impl AttemptService {
    pub fn new(
        attempts: Arc<dyn QuizAttemptRepository>,
        quizzes: Arc<dyn QuizRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            attempts,
            quizzes,
            users,
        }
    }

    async fn load_attempt(&self, attempt_id: &str) -> AppResult<QuizAttempt> {
        self.attempts
            .find_by_id(attempt_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Attempt with id '{}' not found", attempt_id))
            })
    }

    /// Starts a new attempt when the quiz's attempt policy allows it.
    ///
    /// The count-then-create sequence is not transactional: two racing
    /// calls can both pass the limit check with the same prior count.
    /// The unique (quiz, student, attemptNumber) index makes one of the
    /// inserts fail with `Conflict`, which callers may retry.
    pub async fn start_attempt(
        &self,
        claims: &Claims,
        course_id: &str,
        quiz_id: &str,
    ) -> AppResult<QuizAttempt> {
        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        let count = self
            .attempts
            .count_by_student_and_quiz(&claims.sub, quiz_id)
            .await?;

        let allowed = if quiz.multiple_attempts {
            count < quiz.how_many_attempts.max(0) as u64
        } else {
            count < 1
        };
        if !allowed {
            return Err(AppError::PolicyViolation("No attempts remaining".to_string()));
        }

        let attempt = QuizAttempt::in_progress(
            quiz_id,
            &claims.sub,
            course_id,
            count as i32 + 1,
            quiz.points,
        );
        self.attempts.create(attempt).await
    }

    /// Replaces the answer list verbatim while the attempt is in
    /// progress. No grading happens here.
    pub async fn save_progress(
        &self,
        claims: &Claims,
        attempt_id: &str,
        answers: Vec<AnswerInput>,
    ) -> AppResult<QuizAttempt> {
        let mut attempt = self.load_attempt(attempt_id).await?;
        require_owner_or_faculty(claims, &attempt.student)?;

        if attempt.completed {
            return Err(AppError::Conflict(
                "Attempt has already been submitted".to_string(),
            ));
        }

        attempt.answers = answers
            .into_iter()
            .map(|input| Answer::ungraded(&input.question_id, input.answer))
            .collect();
        self.attempts.save(attempt).await
    }

    /// Grades a submission and completes the attempt. Rejects attempts
    /// that were already submitted; re-grading would silently overwrite
    /// the recorded score and timestamp.
    pub async fn submit(
        &self,
        claims: &Claims,
        attempt_id: &str,
        answers: Vec<AnswerInput>,
    ) -> AppResult<QuizAttempt> {
        let mut attempt = self.load_attempt(attempt_id).await?;
        require_owner_or_faculty(claims, &attempt.student)?;

        if attempt.completed {
            return Err(AppError::Conflict(
                "Attempt has already been submitted".to_string(),
            ));
        }

        let quiz = self
            .quizzes
            .find_by_id(&attempt.quiz)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Quiz with id '{}' not found", attempt.quiz))
            })?;

        let graded = grading::grade_submission(&quiz.questions, &answers);
        attempt.complete(graded.answers, graded.score, quiz.points);

        self.attempts.save(attempt).await
    }

    /// The attempt half of the visibility filter.
    pub async fn attempts_for_quiz(
        &self,
        claims: &Claims,
        quiz_id: &str,
    ) -> AppResult<QuizAttempts> {
        if claims.role == UserRole::Faculty {
            let attempts = self.attempts.find_by_quiz(quiz_id).await?;

            let mut views = Vec::with_capacity(attempts.len());
            for attempt in attempts {
                let student_info = self
                    .users
                    .find_by_id(&attempt.student)
                    .await?
                    .as_ref()
                    .map(StudentIdentity::from);
                views.push(AttemptWithStudent {
                    attempt,
                    student_info,
                });
            }
            return Ok(QuizAttempts::Faculty(views));
        }

        let attempts = self
            .attempts
            .find_by_student_and_quiz(&claims.sub, quiz_id)
            .await?;
        Ok(QuizAttempts::Student(attempts))
    }

    pub async fn latest_attempt(
        &self,
        claims: &Claims,
        quiz_id: &str,
    ) -> AppResult<Option<QuizAttempt>> {
        self.attempts.find_latest(&claims.sub, quiz_id).await
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn is_false(value: &bool) -> bool {
    !value
}

/// One graded (or in-progress) answer embedded in an attempt.
///
/// Progress saves store only the raw `answer` values; `is_correct` and
/// `points_earned` stay at their defaults until the grading engine runs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub answer: Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_correct: bool,
    #[serde(default)]
    pub points_earned: i32,
}

impl Answer {
    pub fn ungraded(question_id: &str, answer: Vec<String>) -> Self {
        Answer {
            question_id: question_id.to_string(),
            answer,
            is_correct: false,
            points_earned: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub id: String,
    pub quiz: String,
    pub student: String,
    /// Denormalized course reference for querying.
    pub course: String,
    /// Sequential per (quiz, student), starting at 1. A unique index on
    /// (quiz, student, attemptNumber) rejects racing duplicates.
    pub attempt_number: i32,
    pub answers: Vec<Answer>,
    pub score: i32,
    /// Snapshot of the quiz's aggregate points, frozen at grading time.
    pub total_points: i32,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl QuizAttempt {
    /// A fresh in-progress attempt as the lifecycle manager creates it.
    pub fn in_progress(
        quiz_id: &str,
        student_id: &str,
        course_id: &str,
        attempt_number: i32,
        quiz_points: i32,
    ) -> Self {
        QuizAttempt {
            id: Uuid::new_v4().to_string(),
            quiz: quiz_id.to_string(),
            student: student_id.to_string(),
            course: course_id.to_string(),
            attempt_number,
            answers: Vec::new(),
            score: 0,
            total_points: quiz_points,
            completed: false,
            submitted_at: None,
            created_at: Some(Utc::now()),
        }
    }

    /// Finalizes the attempt with grading results. The only writer of
    /// `score`, `total_points` and `submitted_at`.
    pub fn complete(&mut self, graded_answers: Vec<Answer>, score: i32, quiz_points: i32) {
        self.answers = graded_answers;
        self.score = score;
        self.total_points = quiz_points;
        self.completed = true;
        self.submitted_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_progress_attempt_starts_empty() {
        let attempt = QuizAttempt::in_progress("quiz-1", "student-1", "course-1", 1, 8);
        assert_eq!(attempt.attempt_number, 1);
        assert!(attempt.answers.is_empty());
        assert_eq!(attempt.score, 0);
        assert_eq!(attempt.total_points, 8);
        assert!(!attempt.completed);
        assert!(attempt.submitted_at.is_none());
    }

    #[test]
    fn complete_stamps_grading_fields() {
        let mut attempt = QuizAttempt::in_progress("quiz-1", "student-1", "course-1", 1, 8);
        let graded = vec![Answer {
            question_id: "q1".to_string(),
            answer: vec!["B".to_string()],
            is_correct: true,
            points_earned: 5,
        }];

        attempt.complete(graded, 5, 8);

        assert!(attempt.completed);
        assert_eq!(attempt.score, 5);
        assert_eq!(attempt.total_points, 8);
        assert!(attempt.submitted_at.is_some());
        assert_eq!(attempt.answers.len(), 1);
    }

    #[test]
    fn attempt_round_trip_preserves_grading_fields() {
        let mut attempt = QuizAttempt::in_progress("quiz-1", "student-1", "course-1", 2, 10);
        attempt.complete(
            vec![Answer::ungraded("q1", vec!["A".to_string()])],
            0,
            10,
        );

        let json = serde_json::to_string(&attempt).unwrap();
        let parsed: QuizAttempt = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, attempt);
        assert_eq!(parsed.attempt_number, 2);
    }
}

use serde::Serialize;

use crate::models::domain::{Quiz, QuizAttempt, User};

/// Signin response: bearer token plus the (redacted) user record.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// A published quiz as a student sees it in a course listing, annotated
/// with that student's own progress.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentQuizView {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub latest_score: Option<i32>,
    pub attempt_count: u64,
}

/// Minimal identity fields attached to attempts in the faculty view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentIdentity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for StudentIdentity {
    fn from(user: &User) -> Self {
        StudentIdentity {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptWithStudent {
    #[serde(flatten)]
    pub attempt: QuizAttempt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_info: Option<StudentIdentity>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::models::domain::question::{Question, QuestionType};
use crate::models::domain::quiz::{AssignmentGroup, QuizType, ShowCorrectAnswers};
use crate::models::domain::user::UserRole;

// ---------- auth / users ----------

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,

    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default = "default_role")]
    pub role: UserRole,
}

fn default_role() -> UserRole {
    UserRole::Student
}

/// Makes patch date fields tri-state: an absent field deserializes to
/// `None` (leave stored value alone), an explicit JSON `null` to
/// `Some(None)` (clear it). Plain serde collapses both to `None`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub role: Option<UserRole>,
}

/// Filters for the user listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    pub role: Option<UserRole>,
    pub name: Option<String>,
}

// ---------- courses / modules / assignments ----------

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub number: String,
    pub description: String,
}

impl Default for CreateCourseRequest {
    fn default() -> Self {
        Self {
            name: "New Course".to_string(),
            number: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub number: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateModuleRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: String,
}

impl Default for CreateModuleRequest {
    fn default() -> Self {
        Self {
            name: "New Module".to_string(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateModuleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: String,
    pub points: i32,
    pub due_date: Option<DateTime<Utc>>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_until: Option<DateTime<Utc>>,
}

impl Default for CreateAssignmentRequest {
    fn default() -> Self {
        Self {
            title: "New Assignment".to_string(),
            description: String::new(),
            points: 100,
            due_date: None,
            available_from: None,
            available_until: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub points: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub available_from: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub available_until: Option<Option<DateTime<Utc>>>,
}

// ---------- quizzes ----------

/// Quiz creation body. Every field is optional on the wire; missing
/// fields take the documented defaults (container-level serde default).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateQuizRequest {
    pub title: String,
    pub description: String,
    pub quiz_type: QuizType,
    pub assignment_group: AssignmentGroup,
    pub shuffle_answers: bool,
    pub time_limit: i32,
    pub multiple_attempts: bool,
    pub how_many_attempts: i32,
    pub show_correct_answers: ShowCorrectAnswers,
    pub access_code: String,
    pub one_question_at_a_time: bool,
    pub webcam_required: bool,
    pub lock_questions_after_answering: bool,
    pub due_date: Option<DateTime<Utc>>,
    pub available_date: Option<DateTime<Utc>>,
    pub until_date: Option<DateTime<Utc>>,
    pub published: bool,
    pub questions: Vec<Question>,
}

impl Default for CreateQuizRequest {
    fn default() -> Self {
        Self {
            title: "Untitled Quiz".to_string(),
            description: String::new(),
            quiz_type: QuizType::GradedQuiz,
            assignment_group: AssignmentGroup::Quizzes,
            shuffle_answers: true,
            time_limit: 20,
            multiple_attempts: false,
            how_many_attempts: 1,
            show_correct_answers: ShowCorrectAnswers::Immediately,
            access_code: String::new(),
            one_question_at_a_time: true,
            webcam_required: false,
            lock_questions_after_answering: false,
            due_date: None,
            available_date: None,
            until_date: None,
            published: false,
            questions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuizRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub quiz_type: Option<QuizType>,
    /// Ignored whenever `questions` is also present; the recomputed sum
    /// wins.
    pub points: Option<i32>,
    pub assignment_group: Option<AssignmentGroup>,
    pub shuffle_answers: Option<bool>,
    pub time_limit: Option<i32>,
    pub multiple_attempts: Option<bool>,
    pub how_many_attempts: Option<i32>,
    pub show_correct_answers: Option<ShowCorrectAnswers>,
    pub access_code: Option<String>,
    pub one_question_at_a_time: Option<bool>,
    pub webcam_required: Option<bool>,
    pub lock_questions_after_answering: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub available_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub until_date: Option<Option<DateTime<Utc>>>,
    pub published: Option<bool>,
    pub questions: Option<Vec<Question>>,
}

/// New question body; defaults mirror the editor's starting state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub title: String,
    pub points: i32,
    pub question: String,
    pub choices: Vec<String>,
    pub correct_answers: Vec<String>,
}

impl Default for CreateQuestionRequest {
    fn default() -> Self {
        Self {
            id: None,
            question_type: QuestionType::MultipleChoice,
            title: "New Question".to_string(),
            points: 1,
            question: String::new(),
            choices: vec![
                "Option 1".to_string(),
                "Option 2".to_string(),
                "Option 3".to_string(),
                "Option 4".to_string(),
            ],
            correct_answers: vec!["Option 1".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionUpdate {
    #[serde(rename = "type")]
    pub question_type: Option<QuestionType>,
    pub title: Option<String>,
    pub points: Option<i32>,
    pub question: Option<String>,
    pub choices: Option<Vec<String>>,
    pub correct_answers: Option<Vec<String>>,
}

// ---------- attempts ----------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerInput {
    pub question_id: String,
    pub answer: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveAnswersRequest {
    pub answers: Vec<AnswerInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAttemptRequest {
    pub answers: Vec<AnswerInput>,
}

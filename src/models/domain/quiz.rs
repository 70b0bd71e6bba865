use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::{Question, QuestionSet};
use crate::models::dto::request::{CreateQuizRequest, QuestionUpdate, UpdateQuizRequest};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuizType {
    GradedQuiz,
    PracticeQuiz,
    GradedSurvey,
    UngradedSurvey,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentGroup {
    Quizzes,
    Exams,
    Assignments,
    Project,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShowCorrectAnswers {
    Immediately,
    AfterDueDate,
    Never,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    /// Owning course id (denormalized reference, not embedded).
    pub course: String,
    pub description: String,
    pub quiz_type: QuizType,
    /// Always the sum of the question points; recomputed on every
    /// question mutation and on bulk question replacement.
    pub points: i32,
    pub assignment_group: AssignmentGroup,
    pub shuffle_answers: bool,
    /// Minutes.
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
    pub questions: QuestionSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn from_create(course_id: &str, request: CreateQuizRequest) -> Self {
        let questions = QuestionSet::from(request.questions);
        let points = questions.total_points();

        Quiz {
            id: Uuid::new_v4().to_string(),
            title: request.title,
            course: course_id.to_string(),
            description: request.description,
            quiz_type: request.quiz_type,
            points,
            assignment_group: request.assignment_group,
            shuffle_answers: request.shuffle_answers,
            time_limit: request.time_limit,
            multiple_attempts: request.multiple_attempts,
            how_many_attempts: request.how_many_attempts,
            show_correct_answers: request.show_correct_answers,
            access_code: request.access_code,
            one_question_at_a_time: request.one_question_at_a_time,
            webcam_required: request.webcam_required,
            lock_questions_after_answering: request.lock_questions_after_answering,
            due_date: request.due_date,
            available_date: request.available_date,
            until_date: request.until_date,
            published: request.published,
            questions,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    /// Applies a partial update. When the patch replaces the question
    /// list, `points` is recomputed from that list; the computed value
    /// wins over any explicit `points` in the same patch.
    pub fn apply_update(&mut self, patch: UpdateQuizRequest) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(quiz_type) = patch.quiz_type {
            self.quiz_type = quiz_type;
        }
        if let Some(points) = patch.points {
            self.points = points;
        }
        if let Some(assignment_group) = patch.assignment_group {
            self.assignment_group = assignment_group;
        }
        if let Some(shuffle_answers) = patch.shuffle_answers {
            self.shuffle_answers = shuffle_answers;
        }
        if let Some(time_limit) = patch.time_limit {
            self.time_limit = time_limit;
        }
        if let Some(multiple_attempts) = patch.multiple_attempts {
            self.multiple_attempts = multiple_attempts;
        }
        if let Some(how_many_attempts) = patch.how_many_attempts {
            self.how_many_attempts = how_many_attempts;
        }
        if let Some(show_correct_answers) = patch.show_correct_answers {
            self.show_correct_answers = show_correct_answers;
        }
        if let Some(access_code) = patch.access_code {
            self.access_code = access_code;
        }
        if let Some(one_question_at_a_time) = patch.one_question_at_a_time {
            self.one_question_at_a_time = one_question_at_a_time;
        }
        if let Some(webcam_required) = patch.webcam_required {
            self.webcam_required = webcam_required;
        }
        if let Some(lock) = patch.lock_questions_after_answering {
            self.lock_questions_after_answering = lock;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(available_date) = patch.available_date {
            self.available_date = available_date;
        }
        if let Some(until_date) = patch.until_date {
            self.until_date = until_date;
        }
        if let Some(published) = patch.published {
            self.published = published;
        }
        if let Some(questions) = patch.questions {
            self.questions = QuestionSet::from(questions);
            self.points = self.questions.total_points();
        }
        self.modified_at = Some(Utc::now());
    }

    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
        self.sync_points();
    }

    /// Merges a patch into the question with the given id. Returns false
    /// when no such question exists.
    pub fn update_question(&mut self, question_id: &str, patch: QuestionUpdate) -> bool {
        let Some(question) = self.questions.get_mut(question_id) else {
            return false;
        };
        if let Some(question_type) = patch.question_type {
            question.question_type = question_type;
        }
        if let Some(title) = patch.title {
            question.title = title;
        }
        if let Some(points) = patch.points {
            question.points = points;
        }
        if let Some(prompt) = patch.question {
            question.question = prompt;
        }
        if let Some(choices) = patch.choices {
            question.choices = choices;
        }
        if let Some(correct_answers) = patch.correct_answers {
            question.correct_answers = correct_answers;
        }
        self.sync_points();
        true
    }

    pub fn remove_question(&mut self, question_id: &str) -> Option<Question> {
        let removed = self.questions.remove(question_id)?;
        self.sync_points();
        Some(removed)
    }

    pub fn toggle_published(&mut self) {
        self.published = !self.published;
        self.modified_at = Some(Utc::now());
    }

    fn sync_points(&mut self) {
        self.points = self.questions.total_points();
        self.modified_at = Some(Utc::now());
    }
}

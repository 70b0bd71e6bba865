//! Wire-format checks: the JSON shapes clients depend on.

use courseware_server::models::domain::{
    Question, QuestionType, Quiz, QuizAttempt, User, UserRole,
};
use courseware_server::models::dto::request::CreateQuizRequest;

fn sample_question() -> Question {
    Question {
        id: "q1".to_string(),
        question_type: QuestionType::MultipleChoice,
        title: "MC".to_string(),
        points: 5,
        question: "Pick one".to_string(),
        choices: vec!["A".into(), "B".into()],
        correct_answers: vec!["B".into()],
    }
}

#[test]
fn quiz_serializes_camel_case_with_screaming_enums() {
    let mut quiz = Quiz::from_create("c1", CreateQuizRequest::default());
    quiz.add_question(sample_question());

    let json = serde_json::to_value(&quiz).unwrap();
    assert_eq!(json["quizType"], "GRADED_QUIZ");
    assert_eq!(json["assignmentGroup"], "QUIZZES");
    assert_eq!(json["showCorrectAnswers"], "IMMEDIATELY");
    assert_eq!(json["timeLimit"], 20);
    assert_eq!(json["points"], 5);
    // The question type field is named "type" on the wire.
    assert_eq!(json["questions"][0]["type"], "MULTIPLE_CHOICE");
    assert_eq!(json["questions"][0]["correctAnswers"][0], "B");
}

#[test]
fn quiz_round_trips_through_json() {
    let mut quiz = Quiz::from_create("c1", CreateQuizRequest::default());
    quiz.add_question(sample_question());

    let json = serde_json::to_string(&quiz).unwrap();
    let parsed: Quiz = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, quiz);
}

#[test]
fn in_progress_attempt_omits_grading_only_fields() {
    let attempt = QuizAttempt::in_progress("quiz-1", "s1", "c1", 1, 10);

    let json = serde_json::to_value(&attempt).unwrap();
    assert_eq!(json["attemptNumber"], 1);
    assert_eq!(json["completed"], false);
    assert_eq!(json["totalPoints"], 10);
    assert!(json.get("submittedAt").is_none());
}

#[test]
fn user_role_uses_screaming_snake_case() {
    let user = User::new(
        "jdoe",
        "digest",
        "John",
        "Doe",
        "john@example.com",
        UserRole::Faculty,
    );

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["role"], "FACULTY");
    assert_eq!(json["firstName"], "John");
}

use crate::models::domain::{Question, QuestionType};

pub mod fixtures {
    use super::*;

    pub fn multiple_choice_question(id: &str, points: i32, correct: &[&str]) -> Question {
        Question {
            id: id.to_string(),
            question_type: QuestionType::MultipleChoice,
            title: format!("Question {}", id),
            points,
            question: "Pick the right answer".to_string(),
            choices: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answers: correct.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn fill_in_blank_question(id: &str, points: i32, correct: &[&str]) -> Question {
        Question {
            id: id.to_string(),
            question_type: QuestionType::FillInBlank,
            title: format!("Question {}", id),
            points,
            question: "Fill in the blank".to_string(),
            choices: vec![],
            correct_answers: correct.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn true_false_question(id: &str, points: i32, correct: &str) -> Question {
        Question {
            id: id.to_string(),
            question_type: QuestionType::TrueFalse,
            title: format!("Question {}", id),
            points,
            question: "True or false?".to_string(),
            choices: vec!["True".into(), "False".into()],
            correct_answers: vec![correct.to_string()],
        }
    }
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_question_fixtures_carry_requested_points() {
        assert_eq!(multiple_choice_question("q1", 5, &["B"]).points, 5);
        assert_eq!(fill_in_blank_question("q2", 3, &["Paris"]).points, 3);
        assert_eq!(true_false_question("q3", 2, "True").points, 2);
    }
}

//! Deterministic grading of a submitted answer set against a quiz's
//! question definitions. Pure functions; persistence stays in the
//! attempt service.

use crate::models::domain::attempt::Answer;
use crate::models::domain::question::{Question, QuestionSet, QuestionType};
use crate::models::dto::request::AnswerInput;

pub struct GradedSubmission {
    pub score: i32,
    pub answers: Vec<Answer>,
}

/// Grades each submitted answer against its question. Answers naming a
/// question id that does not exist in the quiz are skipped: they earn
/// nothing and do not appear in the graded result.
pub fn grade_submission(questions: &QuestionSet, submitted: &[AnswerInput]) -> GradedSubmission {
    let mut score = 0;
    let mut graded = Vec::with_capacity(submitted.len());

    for input in submitted {
        let Some(question) = questions.get(&input.question_id) else {
            continue;
        };

        let is_correct = answer_is_correct(question, &input.answer);
        let points_earned = if is_correct { question.points } else { 0 };
        score += points_earned;

        graded.push(Answer {
            question_id: input.question_id.clone(),
            answer: input.answer.clone(),
            is_correct,
            points_earned,
        });
    }

    GradedSubmission {
        score,
        answers: graded,
    }
}

fn answer_is_correct(question: &Question, values: &[String]) -> bool {
    match question.question_type {
        // Exactly one value, exact case-sensitive match.
        QuestionType::MultipleChoice | QuestionType::TrueFalse => {
            values.len() == 1 && question.correct_answers.contains(&values[0])
        }
        // First value, compared case-folded and trimmed.
        QuestionType::FillInBlank => {
            let Some(value) = values.first() else {
                return false;
            };
            let normalized = normalize(value);
            question
                .correct_answers
                .iter()
                .any(|correct| normalize(correct) == normalized)
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{
        fill_in_blank_question as fill_in_blank, multiple_choice_question as multiple_choice,
        true_false_question as true_false,
    };

    fn answer(question_id: &str, values: &[&str]) -> AnswerInput {
        AnswerInput {
            question_id: question_id.to_string(),
            answer: values.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn questions(list: Vec<Question>) -> QuestionSet {
        QuestionSet::from(list)
    }

    #[test]
    fn grades_worked_example_with_normalization() {
        let set = questions(vec![
            multiple_choice("q1", 5, &["B"]),
            fill_in_blank("q2", 3, &["Paris"]),
        ]);

        let result = grade_submission(&set, &[answer("q1", &["B"]), answer("q2", &[" paris "])]);

        assert_eq!(result.score, 8);
        assert_eq!(result.answers.len(), 2);
        assert!(result.answers.iter().all(|a| a.is_correct));
        assert_eq!(result.answers[0].points_earned, 5);
        assert_eq!(result.answers[1].points_earned, 3);
    }

    #[test]
    fn wrong_choice_earns_zero() {
        let set = questions(vec![multiple_choice("q1", 5, &["B"])]);

        let result = grade_submission(&set, &[answer("q1", &["A"])]);

        assert_eq!(result.score, 0);
        assert!(!result.answers[0].is_correct);
        assert_eq!(result.answers[0].points_earned, 0);
    }

    #[test]
    fn choice_match_is_case_sensitive() {
        let set = questions(vec![multiple_choice("q1", 5, &["B"])]);

        let result = grade_submission(&set, &[answer("q1", &["b"])]);

        assert_eq!(result.score, 0);
    }

    #[test]
    fn multiple_values_on_single_choice_are_incorrect() {
        let set = questions(vec![multiple_choice("q1", 5, &["B"])]);

        let result = grade_submission(&set, &[answer("q1", &["B", "C"])]);

        assert!(!result.answers[0].is_correct);
    }

    #[test]
    fn true_false_exact_match() {
        let set = questions(vec![true_false("q1", 2, "True")]);

        assert_eq!(grade_submission(&set, &[answer("q1", &["True"])]).score, 2);
        assert_eq!(grade_submission(&set, &[answer("q1", &["False"])]).score, 0);
    }

    #[test]
    fn fill_in_blank_accepts_any_correct_value() {
        let set = questions(vec![fill_in_blank("q1", 4, &["colour", "color"])]);

        assert_eq!(grade_submission(&set, &[answer("q1", &["COLOR"])]).score, 4);
        assert_eq!(
            grade_submission(&set, &[answer("q1", &["  Colour "])]).score,
            4
        );
        assert_eq!(grade_submission(&set, &[answer("q1", &["couleur"])]).score, 0);
    }

    #[test]
    fn fill_in_blank_empty_submission_is_incorrect() {
        let set = questions(vec![fill_in_blank("q1", 4, &["Paris"])]);

        let result = grade_submission(&set, &[answer("q1", &[])]);

        assert!(!result.answers[0].is_correct);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn unknown_question_ids_are_omitted() {
        let set = questions(vec![multiple_choice("q1", 5, &["B"])]);

        let result = grade_submission(
            &set,
            &[answer("ghost", &["B"]), answer("q1", &["B"])],
        );

        assert_eq!(result.score, 5);
        assert_eq!(result.answers.len(), 1);
        assert_eq!(result.answers[0].question_id, "q1");
    }

    #[test]
    fn grading_is_deterministic() {
        let set = questions(vec![
            multiple_choice("q1", 5, &["B"]),
            fill_in_blank("q2", 3, &["Paris"]),
            true_false("q3", 2, "False"),
        ]);
        let submitted = [
            answer("q1", &["B"]),
            answer("q2", &["paris"]),
            answer("q3", &["True"]),
        ];

        let first = grade_submission(&set, &submitted);
        let second = grade_submission(&set, &submitted);

        assert_eq!(first.score, second.score);
        assert_eq!(first.answers, second.answers);
        assert_eq!(first.score, 8);
    }
}

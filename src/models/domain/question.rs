use serde::{Deserialize, Serialize};

/// Closed set of gradable question types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    FillInBlank,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub title: String,
    pub points: i32,
    /// The prompt shown to the student.
    pub question: String,
    pub choices: Vec<String>,
    pub correct_answers: Vec<String>,
}

/// Ordered, id-keyed set of the questions embedded in a quiz.
///
/// All mutation goes through id-based lookups that report a missing
/// question explicitly, and the container is the single source of truth
/// for the points sum, so `Quiz::points` can never drift from it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct QuestionSet(Vec<Question>);

impl QuestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.0.iter().find(|q| q.id == question_id)
    }

    pub fn get_mut(&mut self, question_id: &str) -> Option<&mut Question> {
        self.0.iter_mut().find(|q| q.id == question_id)
    }

    /// Appends a new question, preserving authoring order.
    pub fn push(&mut self, question: Question) {
        self.0.push(question);
    }

    pub fn remove(&mut self, question_id: &str) -> Option<Question> {
        let index = self.0.iter().position(|q| q.id == question_id)?;
        Some(self.0.remove(index))
    }

    pub fn total_points(&self) -> i32 {
        self.0.iter().map(|q| q.points).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.0.iter()
    }
}

impl From<Vec<Question>> for QuestionSet {
    fn from(questions: Vec<Question>) -> Self {
        Self(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, points: i32) -> Question {
        Question {
            id: id.to_string(),
            question_type: QuestionType::MultipleChoice,
            title: "Question".to_string(),
            points,
            question: "Pick one".to_string(),
            choices: vec!["A".to_string(), "B".to_string()],
            correct_answers: vec!["B".to_string()],
        }
    }

    #[test]
    fn question_type_round_trips_wire_names() {
        let json = serde_json::to_string(&QuestionType::FillInBlank).unwrap();
        assert_eq!(json, "\"FILL_IN_BLANK\"");
        let parsed: QuestionType = serde_json::from_str("\"TRUE_FALSE\"").unwrap();
        assert_eq!(parsed, QuestionType::TrueFalse);
    }

    #[test]
    fn question_type_rejects_unknown_variant() {
        assert!(serde_json::from_str::<QuestionType>("\"ESSAY\"").is_err());
    }

    #[test]
    fn question_set_serializes_as_plain_list() {
        let mut set = QuestionSet::new();
        set.push(question("q1", 5));
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with('['));
        let parsed: QuestionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn question_set_lookup_is_explicit() {
        let mut set = QuestionSet::new();
        set.push(question("q1", 5));
        set.push(question("q2", 3));

        assert!(set.get("q1").is_some());
        assert!(set.get("missing").is_none());
        assert!(set.remove("missing").is_none());
        assert_eq!(set.remove("q1").unwrap().points, 5);
        assert_eq!(set.total_points(), 3);
    }

    #[test]
    fn question_set_preserves_insertion_order() {
        let mut set = QuestionSet::new();
        set.push(question("q2", 1));
        set.push(question("q1", 1));
        let ids: Vec<&str> = set.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q2", "q1"]);
    }
}

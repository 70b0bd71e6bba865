use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Links a user to a course (many-to-many). The composite id makes a
/// duplicate enrollment a unique-index violation rather than a second row.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    pub user: String,
    pub course: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Enrollment {
    pub fn new(user_id: &str, course_id: &str) -> Self {
        Enrollment {
            id: format!("{}-{}", user_id, course_id),
            user: user_id.to_string(),
            course: course_id.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_id() {
        let enrollment = Enrollment::new("u1", "c1");
        assert_eq!(enrollment.id, "u1-c1");
        assert_eq!(enrollment.user, "u1");
        assert_eq!(enrollment.course, "c1");
    }
}

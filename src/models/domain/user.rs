use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dto::request::SignupRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Student,
    Faculty,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    // Stored in Mongo, stripped via `redacted` before leaving the service
    // layer so it never appears in a response body.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password_digest: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(
        username: &str,
        password_digest: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
        role: UserRole,
    ) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            password_digest: password_digest.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            role,
            created_at: Some(Utc::now()),
        }
    }

    pub fn from_signup(request: SignupRequest, password_digest: String) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            username: request.username,
            password_digest,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            role: request.role,
            created_at: Some(Utc::now()),
        }
    }

    pub fn redacted(mut self) -> Self {
        self.password_digest.clear();
        self
    }
}

#[cfg(test)]
impl User {
    pub fn test_student(username: &str) -> Self {
        User::new(
            username,
            "digest",
            "Test",
            "Student",
            &format!("{}@example.com", username),
            UserRole::Student,
        )
    }

    pub fn test_faculty(username: &str) -> Self {
        User::new(
            username,
            "digest",
            "Test",
            "Faculty",
            &format!("{}@example.com", username),
            UserRole::Faculty,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(
            "jdoe",
            "digest",
            "John",
            "Doe",
            "john@example.com",
            UserRole::Student,
        );
        assert_eq!(user.username, "jdoe");
        assert_eq!(user.role, UserRole::Student);
        assert!(user.created_at.is_some());
        assert!(!user.id.is_empty());
    }

    #[test]
    fn test_role_serializes_screaming_snake() {
        let json = serde_json::to_string(&UserRole::Faculty).unwrap();
        assert_eq!(json, "\"FACULTY\"");
        let parsed: UserRole = serde_json::from_str("\"STUDENT\"").unwrap();
        assert_eq!(parsed, UserRole::Student);
    }

    #[test]
    fn test_redacted_user_omits_password_digest() {
        let user = User::test_student("alice").redacted();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("passwordDigest"));
    }
}

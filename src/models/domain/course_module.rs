use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dto::request::CreateModuleRequest;

/// A content module within a course.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub course: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CourseModule {
    pub fn from_create(course_id: &str, request: CreateModuleRequest) -> Self {
        CourseModule {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            description: request.description,
            course: course_id.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}

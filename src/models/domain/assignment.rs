use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dto::request::CreateAssignmentRequest;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub course: String,
    pub description: String,
    pub points: i32,
    pub due_date: Option<DateTime<Utc>>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Assignment {
    pub fn from_create(course_id: &str, request: CreateAssignmentRequest) -> Self {
        Assignment {
            id: Uuid::new_v4().to_string(),
            title: request.title,
            course: course_id.to_string(),
            description: request.description,
            points: request.points,
            due_date: request.due_date,
            available_from: request.available_from,
            available_until: request.available_until,
            created_at: Some(Utc::now()),
        }
    }
}

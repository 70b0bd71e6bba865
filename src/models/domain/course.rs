use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dto::request::CreateCourseRequest;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub number: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Course {
    pub fn from_create(request: CreateCourseRequest) -> Self {
        Course {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            number: request.number,
            description: request.description,
            created_at: Some(Utc::now()),
        }
    }
}

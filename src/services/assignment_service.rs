use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{require_faculty, Claims},
    errors::{AppError, AppResult},
    models::domain::Assignment,
    models::dto::request::{CreateAssignmentRequest, UpdateAssignmentRequest},
    repositories::AssignmentRepository,
};

pub struct AssignmentService {
    assignments: Arc<dyn AssignmentRepository>,
}

impl AssignmentService {
    pub fn new(assignments: Arc<dyn AssignmentRepository>) -> Self {
        Self { assignments }
    }

    async fn load_assignment(&self, assignment_id: &str) -> AppResult<Assignment> {
        self.assignments
            .find_by_id(assignment_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Assignment with id '{}' not found",
                    assignment_id
                ))
            })
    }

    pub async fn assignments_for_course(&self, course_id: &str) -> AppResult<Vec<Assignment>> {
        self.assignments.find_by_course(course_id).await
    }

    pub async fn get_assignment(&self, assignment_id: &str) -> AppResult<Assignment> {
        self.load_assignment(assignment_id).await
    }

    pub async fn create_assignment(
        &self,
        claims: &Claims,
        course_id: &str,
        request: CreateAssignmentRequest,
    ) -> AppResult<Assignment> {
        require_faculty(claims)?;
        request.validate()?;
        self.assignments
            .create(Assignment::from_create(course_id, request))
            .await
    }

    pub async fn update_assignment(
        &self,
        claims: &Claims,
        assignment_id: &str,
        patch: UpdateAssignmentRequest,
    ) -> AppResult<Assignment> {
        require_faculty(claims)?;

        let mut assignment = self.load_assignment(assignment_id).await?;
        if let Some(title) = patch.title {
            assignment.title = title;
        }
        if let Some(description) = patch.description {
            assignment.description = description;
        }
        if let Some(points) = patch.points {
            assignment.points = points;
        }
        if let Some(due_date) = patch.due_date {
            assignment.due_date = due_date;
        }
        if let Some(available_from) = patch.available_from {
            assignment.available_from = available_from;
        }
        if let Some(available_until) = patch.available_until {
            assignment.available_until = available_until;
        }
        self.assignments.save(assignment).await
    }

    pub async fn delete_assignment(&self, claims: &Claims, assignment_id: &str) -> AppResult<()> {
        require_faculty(claims)?;
        if !self.assignments.delete(assignment_id).await? {
            return Err(AppError::NotFound(format!(
                "Assignment with id '{}' not found",
                assignment_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::assignment_repository::MockAssignmentRepository;
    use chrono::Utc;

    #[actix_rt::test]
    async fn create_assignment_requires_faculty() {
        let service = AssignmentService::new(Arc::new(MockAssignmentRepository::new()));
        let result = service
            .create_assignment(
                &Claims::test_student("s1"),
                "c1",
                CreateAssignmentRequest::default(),
            )
            .await;

        assert!(matches!(result, Err(AppError::PolicyViolation(_))));
    }

    #[actix_rt::test]
    async fn update_can_clear_due_date() {
        let mut assignments = MockAssignmentRepository::new();
        assignments.expect_find_by_id().returning(|id| {
            let mut assignment = Assignment::from_create(
                "c1",
                CreateAssignmentRequest {
                    due_date: Some(Utc::now()),
                    ..Default::default()
                },
            );
            assignment.id = id.to_string();
            Ok(Some(assignment))
        });
        assignments.expect_save().returning(Ok);

        let service = AssignmentService::new(Arc::new(assignments));
        let assignment = service
            .update_assignment(
                &Claims::test_faculty("prof"),
                "a1",
                UpdateAssignmentRequest {
                    due_date: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(assignment.due_date.is_none());
    }

    #[actix_rt::test]
    async fn update_leaves_absent_fields_untouched() {
        let mut assignments = MockAssignmentRepository::new();
        assignments.expect_find_by_id().returning(|id| {
            let mut assignment =
                Assignment::from_create("c1", CreateAssignmentRequest::default());
            assignment.id = id.to_string();
            Ok(Some(assignment))
        });
        assignments.expect_save().returning(Ok);

        let service = AssignmentService::new(Arc::new(assignments));
        let assignment = service
            .update_assignment(
                &Claims::test_faculty("prof"),
                "a1",
                UpdateAssignmentRequest {
                    points: Some(50),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(assignment.points, 50);
        assert_eq!(assignment.title, "New Assignment");
    }
}

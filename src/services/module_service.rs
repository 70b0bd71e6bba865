use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{require_faculty, Claims},
    errors::{AppError, AppResult},
    models::domain::CourseModule,
    models::dto::request::{CreateModuleRequest, UpdateModuleRequest},
    repositories::ModuleRepository,
};

pub struct ModuleService {
    modules: Arc<dyn ModuleRepository>,
}

impl ModuleService {
    pub fn new(modules: Arc<dyn ModuleRepository>) -> Self {
        Self { modules }
    }

    pub async fn modules_for_course(&self, course_id: &str) -> AppResult<Vec<CourseModule>> {
        self.modules.find_by_course(course_id).await
    }

    pub async fn create_module(
        &self,
        claims: &Claims,
        course_id: &str,
        request: CreateModuleRequest,
    ) -> AppResult<CourseModule> {
        require_faculty(claims)?;
        request.validate()?;
        self.modules
            .create(CourseModule::from_create(course_id, request))
            .await
    }

    pub async fn update_module(
        &self,
        claims: &Claims,
        module_id: &str,
        patch: UpdateModuleRequest,
    ) -> AppResult<CourseModule> {
        require_faculty(claims)?;

        let mut module = self.modules.find_by_id(module_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Module with id '{}' not found", module_id))
        })?;
        if let Some(name) = patch.name {
            module.name = name;
        }
        if let Some(description) = patch.description {
            module.description = description;
        }
        self.modules.save(module).await
    }

    pub async fn delete_module(&self, claims: &Claims, module_id: &str) -> AppResult<()> {
        require_faculty(claims)?;
        if !self.modules.delete(module_id).await? {
            return Err(AppError::NotFound(format!(
                "Module with id '{}' not found",
                module_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::module_repository::MockModuleRepository;

    #[actix_rt::test]
    async fn create_module_requires_faculty() {
        let service = ModuleService::new(Arc::new(MockModuleRepository::new()));
        let result = service
            .create_module(
                &Claims::test_student("s1"),
                "c1",
                CreateModuleRequest::default(),
            )
            .await;

        assert!(matches!(result, Err(AppError::PolicyViolation(_))));
    }

    #[actix_rt::test]
    async fn update_module_applies_partial_patch() {
        let mut modules = MockModuleRepository::new();
        modules.expect_find_by_id().returning(|id| {
            let mut module = CourseModule::from_create("c1", CreateModuleRequest::default());
            module.id = id.to_string();
            module.description = "original".to_string();
            Ok(Some(module))
        });
        modules.expect_save().returning(Ok);

        let service = ModuleService::new(Arc::new(modules));
        let module = service
            .update_module(
                &Claims::test_faculty("prof"),
                "m1",
                UpdateModuleRequest {
                    name: Some("Week 2".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(module.name, "Week 2");
        assert_eq!(module.description, "original");
    }

    #[actix_rt::test]
    async fn delete_missing_module_is_not_found() {
        let mut modules = MockModuleRepository::new();
        modules.expect_delete().returning(|_| Ok(false));

        let service = ModuleService::new(Arc::new(modules));
        let result = service.delete_module(&Claims::test_faculty("prof"), "ghost").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}

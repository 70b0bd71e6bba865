use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{require_faculty, require_owner_or_faculty, Claims},
    errors::{AppError, AppResult},
    models::domain::{Course, Enrollment, User},
    models::dto::request::{CreateCourseRequest, UpdateCourseRequest},
    repositories::{CourseRepository, EnrollmentRepository, UserRepository},
};

pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
    users: Arc<dyn UserRepository>,
}

impl CourseService {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            courses,
            enrollments,
            users,
        }
    }

    async fn load_course(&self, course_id: &str) -> AppResult<Course> {
        self.courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Course with id '{}' not found", course_id))
            })
    }

    pub async fn list_courses(&self) -> AppResult<Vec<Course>> {
        self.courses.find_all().await
    }

    pub async fn get_course(&self, course_id: &str) -> AppResult<Course> {
        self.load_course(course_id).await
    }

    /// Creates a course and enrolls its creator.
    pub async fn create_course(
        &self,
        claims: &Claims,
        request: CreateCourseRequest,
    ) -> AppResult<Course> {
        require_faculty(claims)?;
        request.validate()?;

        let course = self.courses.create(Course::from_create(request)).await?;
        self.enrollments
            .create(Enrollment::new(&claims.sub, &course.id))
            .await?;
        Ok(course)
    }

    pub async fn update_course(
        &self,
        claims: &Claims,
        course_id: &str,
        patch: UpdateCourseRequest,
    ) -> AppResult<Course> {
        require_faculty(claims)?;

        let mut course = self.load_course(course_id).await?;
        if let Some(name) = patch.name {
            course.name = name;
        }
        if let Some(number) = patch.number {
            course.number = number;
        }
        if let Some(description) = patch.description {
            course.description = description;
        }
        self.courses.save(course).await
    }

    /// Deletes a course and cascades to its enrollments. Content owned
    /// by the course (modules, assignments, quizzes) is left for its
    /// own endpoints; orphaned rows are unreachable through the API.
    pub async fn delete_course(&self, claims: &Claims, course_id: &str) -> AppResult<()> {
        require_faculty(claims)?;
        if !self.courses.delete(course_id).await? {
            return Err(AppError::NotFound(format!(
                "Course with id '{}' not found",
                course_id
            )));
        }
        let removed = self.enrollments.delete_for_course(course_id).await?;
        log::info!("Deleted course {} and {} enrollments", course_id, removed);
        Ok(())
    }

    pub async fn enroll(
        &self,
        claims: &Claims,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Enrollment> {
        require_owner_or_faculty(claims, user_id)?;
        self.load_course(course_id).await?;
        self.enrollments
            .create(Enrollment::new(user_id, course_id))
            .await
    }

    pub async fn unenroll(&self, claims: &Claims, user_id: &str, course_id: &str) -> AppResult<()> {
        require_owner_or_faculty(claims, user_id)?;
        if !self.enrollments.delete(user_id, course_id).await? {
            return Err(AppError::NotFound(format!(
                "User '{}' is not enrolled in course '{}'",
                user_id, course_id
            )));
        }
        Ok(())
    }

    pub async fn courses_for_user(&self, claims: &Claims, user_id: &str) -> AppResult<Vec<Course>> {
        require_owner_or_faculty(claims, user_id)?;

        let enrollments = self.enrollments.find_for_user(user_id).await?;
        let mut courses = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            // Skip enrollments whose course has since been deleted.
            if let Some(course) = self.courses.find_by_id(&enrollment.course).await? {
                courses.push(course);
            }
        }
        Ok(courses)
    }

    pub async fn users_for_course(&self, claims: &Claims, course_id: &str) -> AppResult<Vec<User>> {
        require_faculty(claims)?;

        let enrollments = self.enrollments.find_for_course(course_id).await?;
        let mut users = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            if let Some(user) = self.users.find_by_id(&enrollment.user).await? {
                users.push(user.redacted());
            }
        }
        Ok(users)
    }
}

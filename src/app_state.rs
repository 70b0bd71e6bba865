use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoAssignmentRepository, MongoCourseRepository, MongoEnrollmentRepository,
        MongoModuleRepository, MongoQuizAttemptRepository, MongoQuizRepository,
        MongoUserRepository,
    },
    services::{
        AssignmentService, AttemptService, CourseService, ModuleService, QuizService, UserService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub course_service: Arc<CourseService>,
    pub module_service: Arc<ModuleService>,
    pub assignment_service: Arc<AssignmentService>,
    pub quiz_service: Arc<QuizService>,
    pub attempt_service: Arc<AttemptService>,
    pub jwt_service: Arc<JwtService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let course_repository = Arc::new(MongoCourseRepository::new(&db));
        course_repository.ensure_indexes().await?;

        let enrollment_repository = Arc::new(MongoEnrollmentRepository::new(&db));
        enrollment_repository.ensure_indexes().await?;

        let module_repository = Arc::new(MongoModuleRepository::new(&db));
        module_repository.ensure_indexes().await?;

        let assignment_repository = Arc::new(MongoAssignmentRepository::new(&db));
        assignment_repository.ensure_indexes().await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        // The unique (quiz, student, attemptNumber) index backs the
        // attempt-limit race handling; it must exist before serving.
        let attempt_repository = Arc::new(MongoQuizAttemptRepository::new(&db));
        attempt_repository.ensure_indexes().await?;

        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        let user_service = Arc::new(UserService::new(
            user_repository.clone(),
            jwt_service.clone(),
        ));
        let course_service = Arc::new(CourseService::new(
            course_repository,
            enrollment_repository,
            user_repository.clone(),
        ));
        let module_service = Arc::new(ModuleService::new(module_repository));
        let assignment_service = Arc::new(AssignmentService::new(assignment_repository));
        let quiz_service = Arc::new(QuizService::new(
            quiz_repository.clone(),
            attempt_repository.clone(),
        ));
        let attempt_service = Arc::new(AttemptService::new(
            attempt_repository,
            quiz_repository,
            user_repository,
        ));

        Ok(Self {
            user_service,
            course_service,
            module_service,
            assignment_service,
            quiz_service,
            attempt_service,
            jwt_service,
            db,
            config: Arc::new(config),
        })
    }
}

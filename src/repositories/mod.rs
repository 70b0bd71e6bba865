pub mod assignment_repository;
pub mod attempt_repository;
pub mod course_repository;
pub mod enrollment_repository;
pub mod module_repository;
pub mod quiz_repository;
pub mod user_repository;

pub use assignment_repository::{AssignmentRepository, MongoAssignmentRepository};
pub use attempt_repository::{MongoQuizAttemptRepository, QuizAttemptRepository};
pub use course_repository::{CourseRepository, MongoCourseRepository};
pub use enrollment_repository::{EnrollmentRepository, MongoEnrollmentRepository};
pub use module_repository::{ModuleRepository, MongoModuleRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

pub mod assignment_service;
pub mod attempt_service;
pub mod course_service;
pub mod grading;
pub mod module_service;
pub mod quiz_service;
pub mod user_service;

pub use assignment_service::AssignmentService;
pub use attempt_service::{AttemptService, QuizAttempts};
pub use course_service::CourseService;
pub use module_service::ModuleService;
pub use quiz_service::{CourseQuizzes, QuizService};
pub use user_service::UserService;

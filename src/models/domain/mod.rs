pub mod assignment;
pub mod attempt;
pub mod course;
pub mod course_module;
pub mod enrollment;
pub mod question;
pub mod quiz;
pub mod user;

pub use assignment::Assignment;
pub use attempt::{Answer, QuizAttempt};
pub use course::Course;
pub use course_module::CourseModule;
pub use enrollment::Enrollment;
pub use question::{Question, QuestionSet, QuestionType};
pub use quiz::Quiz;
pub use user::{User, UserRole};

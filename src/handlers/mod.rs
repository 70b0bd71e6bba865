pub mod assignment_handler;
pub mod attempt_handler;
pub mod course_handler;
pub mod module_handler;
pub mod quiz_handler;
pub mod user_handler;

use actix_web::web;

/// Registers every route on the app. Longer literal paths are added
/// before their parameterized siblings so `/api/users/profile` is not
/// swallowed by `/api/users/{userId}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // health
        .service(user_handler::health_check)
        .service(user_handler::health_check_ready)
        .service(user_handler::health_check_live)
        // auth + users
        .service(user_handler::signup)
        .service(user_handler::signin)
        .service(user_handler::profile)
        .service(user_handler::get_all_users)
        .service(course_handler::courses_for_user)
        .service(course_handler::enroll)
        .service(course_handler::unenroll)
        .service(user_handler::get_user)
        .service(user_handler::update_user)
        .service(user_handler::delete_user)
        // courses
        .service(course_handler::get_all_courses)
        .service(course_handler::create_course)
        .service(course_handler::users_for_course)
        // modules / assignments
        .service(module_handler::get_modules)
        .service(module_handler::create_module)
        .service(module_handler::update_module)
        .service(module_handler::delete_module)
        .service(assignment_handler::get_assignments)
        .service(assignment_handler::create_assignment)
        .service(assignment_handler::get_assignment)
        .service(assignment_handler::update_assignment)
        .service(assignment_handler::delete_assignment)
        // quizzes
        .service(quiz_handler::get_quizzes)
        .service(quiz_handler::create_quiz)
        .service(quiz_handler::toggle_publish)
        .service(quiz_handler::add_question)
        .service(quiz_handler::update_question)
        .service(quiz_handler::delete_question)
        // attempts
        .service(attempt_handler::get_latest_attempt)
        .service(attempt_handler::get_attempts)
        .service(attempt_handler::start_attempt)
        .service(attempt_handler::submit_attempt)
        .service(attempt_handler::save_attempt)
        // parameterized quiz routes last
        .service(quiz_handler::get_quiz)
        .service(quiz_handler::update_quiz)
        .service(quiz_handler::delete_quiz)
        // course detail routes after /api/courses/{courseId}/... siblings
        .service(course_handler::get_course)
        .service(course_handler::update_course)
        .service(course_handler::delete_course);
}

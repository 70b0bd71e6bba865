use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{CreateCourseRequest, UpdateCourseRequest},
};

#[get("/api/courses")]
async fn get_all_courses(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let courses = state.course_service.list_courses().await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[get("/api/courses/{courseId}")]
async fn get_course(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get_course(&course_id).await?;
    Ok(HttpResponse::Ok().json(course))
}

#[post("/api/courses")]
async fn create_course(
    state: web::Data<AppState>,
    request: web::Json<CreateCourseRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .create_course(&auth.0, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(course))
}

#[put("/api/courses/{courseId}")]
async fn update_course(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    request: web::Json<UpdateCourseRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .update_course(&auth.0, &course_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(course))
}

#[delete("/api/courses/{courseId}")]
async fn delete_course(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.course_service.delete_course(&auth.0, &course_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/api/users/{userId}/courses/{courseId}")]
async fn enroll(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (user_id, course_id) = path.into_inner();
    let enrollment = state
        .course_service
        .enroll(&auth.0, &user_id, &course_id)
        .await?;
    Ok(HttpResponse::Created().json(enrollment))
}

#[delete("/api/users/{userId}/courses/{courseId}")]
async fn unenroll(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (user_id, course_id) = path.into_inner();
    state
        .course_service
        .unenroll(&auth.0, &user_id, &course_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/api/users/{userId}/courses")]
async fn courses_for_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let courses = state
        .course_service
        .courses_for_user(&auth.0, &user_id)
        .await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[get("/api/courses/{courseId}/users")]
async fn users_for_course(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let users = state
        .course_service
        .users_for_course(&auth.0, &course_id)
        .await?;
    Ok(HttpResponse::Ok().json(users))
}

use actix_web::{get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{SaveAnswersRequest, SubmitAttemptRequest},
};

#[get("/api/courses/{courseId}/quizzes/{quizId}/attempts")]
async fn get_attempts(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, quiz_id) = path.into_inner();
    let attempts = state
        .attempt_service
        .attempts_for_quiz(&auth.0, &quiz_id)
        .await?;
    Ok(HttpResponse::Ok().json(attempts))
}

#[get("/api/courses/{courseId}/quizzes/{quizId}/attempts/latest")]
async fn get_latest_attempt(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, quiz_id) = path.into_inner();
    // Serializes as `null` when the caller has no attempts yet.
    let latest = state.attempt_service.latest_attempt(&auth.0, &quiz_id).await?;
    Ok(HttpResponse::Ok().json(latest))
}

#[post("/api/courses/{courseId}/quizzes/{quizId}/attempts")]
async fn start_attempt(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (course_id, quiz_id) = path.into_inner();
    let attempt = state
        .attempt_service
        .start_attempt(&auth.0, &course_id, &quiz_id)
        .await?;
    Ok(HttpResponse::Created().json(attempt))
}

#[put("/api/courses/{courseId}/quizzes/{quizId}/attempts/{attemptId}")]
async fn save_attempt(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
    request: web::Json<SaveAnswersRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, _quiz_id, attempt_id) = path.into_inner();
    let attempt = state
        .attempt_service
        .save_progress(&auth.0, &attempt_id, request.into_inner().answers)
        .await?;
    Ok(HttpResponse::Ok().json(attempt))
}

#[post("/api/courses/{courseId}/quizzes/{quizId}/attempts/{attemptId}/submit")]
async fn submit_attempt(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
    request: web::Json<SubmitAttemptRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, _quiz_id, attempt_id) = path.into_inner();
    let attempt = state
        .attempt_service
        .submit(&auth.0, &attempt_id, request.into_inner().answers)
        .await?;
    Ok(HttpResponse::Ok().json(attempt))
}

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{
        CreateQuestionRequest, CreateQuizRequest, QuestionUpdate, UpdateQuizRequest,
    },
};

#[get("/api/courses/{courseId}/quizzes")]
async fn get_quizzes(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quizzes = state
        .quiz_service
        .quizzes_for_course(&auth.0, &course_id)
        .await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[post("/api/courses/{courseId}/quizzes")]
async fn create_quiz(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    request: web::Json<CreateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .create_quiz(&auth.0, &course_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[get("/api/courses/{courseId}/quizzes/{quizId}")]
async fn get_quiz(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, quiz_id) = path.into_inner();
    let quiz = state.quiz_service.get_quiz(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[put("/api/courses/{courseId}/quizzes/{quizId}")]
async fn update_quiz(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, quiz_id) = path.into_inner();
    let quiz = state
        .quiz_service
        .update_quiz(&auth.0, &quiz_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/api/courses/{courseId}/quizzes/{quizId}")]
async fn delete_quiz(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, quiz_id) = path.into_inner();
    state.quiz_service.delete_quiz(&auth.0, &quiz_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[put("/api/courses/{courseId}/quizzes/{quizId}/publish")]
async fn toggle_publish(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, quiz_id) = path.into_inner();
    let quiz = state.quiz_service.toggle_publish(&auth.0, &quiz_id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/api/courses/{courseId}/quizzes/{quizId}/questions")]
async fn add_question(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<CreateQuestionRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, quiz_id) = path.into_inner();
    let quiz = state
        .quiz_service
        .add_question(&auth.0, &quiz_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[put("/api/courses/{courseId}/quizzes/{quizId}/questions/{questionId}")]
async fn update_question(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
    request: web::Json<QuestionUpdate>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, quiz_id, question_id) = path.into_inner();
    let quiz = state
        .quiz_service
        .update_question(&auth.0, &quiz_id, &question_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/api/courses/{courseId}/quizzes/{quizId}/questions/{questionId}")]
async fn delete_question(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, quiz_id, question_id) = path.into_inner();
    let quiz = state
        .quiz_service
        .delete_question(&auth.0, &quiz_id, &question_id)
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

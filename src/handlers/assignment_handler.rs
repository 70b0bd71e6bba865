use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{CreateAssignmentRequest, UpdateAssignmentRequest},
};

#[get("/api/courses/{courseId}/assignments")]
async fn get_assignments(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let assignments = state
        .assignment_service
        .assignments_for_course(&course_id)
        .await?;
    Ok(HttpResponse::Ok().json(assignments))
}

#[get("/api/courses/{courseId}/assignments/{assignmentId}")]
async fn get_assignment(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, assignment_id) = path.into_inner();
    let assignment = state.assignment_service.get_assignment(&assignment_id).await?;
    Ok(HttpResponse::Ok().json(assignment))
}

#[post("/api/courses/{courseId}/assignments")]
async fn create_assignment(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    request: web::Json<CreateAssignmentRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let assignment = state
        .assignment_service
        .create_assignment(&auth.0, &course_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(assignment))
}

#[put("/api/courses/{courseId}/assignments/{assignmentId}")]
async fn update_assignment(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateAssignmentRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, assignment_id) = path.into_inner();
    let assignment = state
        .assignment_service
        .update_assignment(&auth.0, &assignment_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(assignment))
}

#[delete("/api/courses/{courseId}/assignments/{assignmentId}")]
async fn delete_assignment(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, assignment_id) = path.into_inner();
    state
        .assignment_service
        .delete_assignment(&auth.0, &assignment_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

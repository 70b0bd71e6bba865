use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{CreateModuleRequest, UpdateModuleRequest},
};

#[get("/api/courses/{courseId}/modules")]
async fn get_modules(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let modules = state.module_service.modules_for_course(&course_id).await?;
    Ok(HttpResponse::Ok().json(modules))
}

#[post("/api/courses/{courseId}/modules")]
async fn create_module(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    request: web::Json<CreateModuleRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let module = state
        .module_service
        .create_module(&auth.0, &course_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(module))
}

#[put("/api/courses/{courseId}/modules/{moduleId}")]
async fn update_module(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateModuleRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, module_id) = path.into_inner();
    let module = state
        .module_service
        .update_module(&auth.0, &module_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(module))
}

#[delete("/api/courses/{courseId}/modules/{moduleId}")]
async fn delete_module(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (_course_id, module_id) = path.into_inner();
    state.module_service.delete_module(&auth.0, &module_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{SigninRequest, SignupRequest, UpdateUserRequest, UserQuery},
};

#[post("/api/users/signup")]
async fn signup(
    state: web::Data<AppState>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.user_service.signup(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/api/users/signin")]
async fn signin(
    state: web::Data<AppState>,
    request: web::Json<SigninRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.user_service.signin(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/users/profile")]
async fn profile(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.profile(&auth.0).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[get("/api/users")]
async fn get_all_users(
    state: web::Data<AppState>,
    query: web::Query<UserQuery>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let users = state
        .user_service
        .list_users(&auth.0, query.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/api/users/{userId}")]
async fn get_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[put("/api/users/{userId}")]
async fn update_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    request: web::Json<UpdateUserRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state
        .user_service
        .update_user(&auth.0, &user_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

#[delete("/api/users/{userId}")]
async fn delete_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.user_service.delete_user(&auth.0, &user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let db_health = state.db.health_check().await;

    let status = if db_health.is_ok() {
        "ready"
    } else {
        "not_ready"
    };

    let response = serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_health.is_ok() { "ok" } else { "error" }
        }
    });

    if db_health.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[get("/health/live")]
async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

use std::future::{ready, Ready};

use actix_web::{http::header::AUTHORIZATION, web, FromRequest, HttpRequest};

use crate::{auth::Claims, auth::JwtService, errors::AppError};

/// Extractor for the authenticated principal in handlers. Validates the
/// bearer token against the `JwtService` registered as app data, so the
/// claims arrive as an explicit handler parameter.
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(extract_claims(req).map(AuthenticatedUser))
    }
}

fn extract_claims(req: &HttpRequest) -> Result<Claims, AppError> {
    let jwt_service = req
        .app_data::<web::Data<JwtService>>()
        .ok_or_else(|| AppError::InternalError("JWT service not configured".to_string()))?;

    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("Invalid authorization header format".to_string())
    })?;

    jwt_service.validate_token(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::domain::User;
    use actix_web::test::TestRequest;

    fn jwt_data() -> web::Data<JwtService> {
        let config = Config::test_config();
        web::Data::new(JwtService::new(&config.jwt_secret, 1))
    }

    #[actix_web::test]
    async fn test_extracts_claims_from_valid_bearer_token() {
        let jwt = jwt_data();
        let user = User::test_student("alice");
        let token = jwt.create_token(&user).unwrap();

        let req = TestRequest::default()
            .app_data(jwt.clone())
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_http_request();

        let claims = extract_claims(&req).unwrap();
        assert_eq!(claims.sub, user.id);
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let req = TestRequest::default().app_data(jwt_data()).to_http_request();
        assert!(matches!(
            extract_claims(&req),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[actix_web::test]
    async fn test_non_bearer_header_is_unauthorized() {
        let req = TestRequest::default()
            .app_data(jwt_data())
            .insert_header((AUTHORIZATION, "Basic abc123"))
            .to_http_request();
        assert!(matches!(
            extract_claims(&req),
            Err(AppError::Unauthorized(_))
        ));
    }
}

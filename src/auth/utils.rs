use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::user::UserRole,
};

pub fn require_faculty(claims: &Claims) -> AppResult<()> {
    if claims.role != UserRole::Faculty {
        return Err(AppError::PolicyViolation(
            "Only faculty can perform this action".to_string(),
        ));
    }
    Ok(())
}

pub fn require_owner_or_faculty(claims: &Claims, resource_owner: &str) -> AppResult<()> {
    if claims.role != UserRole::Faculty && claims.sub != resource_owner {
        return Err(AppError::PolicyViolation(
            "You can only access your own resources".to_string(),
        ));
    }
    Ok(())
}

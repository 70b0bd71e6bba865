use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::user::{User, UserRole};

/// The calling principal, as every core entry point receives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user id)
    pub username: String,
    pub role: UserRole,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(user: &User, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}

#[cfg(test)]
impl Claims {
    pub fn test_student(user_id: &str) -> Self {
        Self {
            sub: user_id.to_string(),
            username: format!("user-{}", user_id),
            role: UserRole::Student,
            iat: 0,
            exp: 9999999999,
        }
    }

    pub fn test_faculty(user_id: &str) -> Self {
        Self {
            sub: user_id.to_string(),
            username: format!("user-{}", user_id),
            role: UserRole::Faculty,
            iat: 0,
            exp: 9999999999,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let user = User::test_student("jdoe");
        let claims = Claims::new(&user, 24);

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, "jdoe");
        assert_eq!(claims.role, UserRole::Student);
        assert!(claims.exp > claims.iat);
    }
}

use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{require_faculty, require_owner_or_faculty, Claims, JwtService},
    errors::{AppError, AppResult},
    models::domain::User,
    models::dto::request::{SigninRequest, SignupRequest, UpdateUserRequest, UserQuery},
    models::dto::response::AuthResponse,
    repositories::UserRepository,
};

pub fn hash_password(password: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub struct UserService {
    users: Arc<dyn UserRepository>,
    jwt: Arc<JwtService>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, jwt: Arc<JwtService>) -> Self {
        Self { users, jwt }
    }

    async fn load_user(&self, user_id: &str) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", user_id)))
    }

    pub async fn signup(&self, request: SignupRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        if self.users.find_by_username(&request.username).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Username '{}' is already taken",
                request.username
            )));
        }

        let digest = hash_password(&request.password);
        let user = self.users.create(User::from_signup(request, digest)).await?;
        let token = self.jwt.create_token(&user)?;

        Ok(AuthResponse {
            token,
            user: user.redacted(),
        })
    }

    pub async fn signin(&self, request: SigninRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        let digest = hash_password(&request.password);
        let user = self
            .users
            .find_by_credentials(&request.username, &digest)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        let token = self.jwt.create_token(&user)?;
        Ok(AuthResponse {
            token,
            user: user.redacted(),
        })
    }

    pub async fn profile(&self, claims: &Claims) -> AppResult<User> {
        Ok(self.load_user(&claims.sub).await?.redacted())
    }

    pub async fn get_user(&self, user_id: &str) -> AppResult<User> {
        Ok(self.load_user(user_id).await?.redacted())
    }

    /// Lists users, optionally narrowed by role and/or a name fragment.
    /// When both filters are present the name listing is filtered by
    /// role in memory.
    pub async fn list_users(&self, claims: &Claims, query: UserQuery) -> AppResult<Vec<User>> {
        require_faculty(claims)?;

        let users = match (&query.name, query.role) {
            (Some(name), _) => {
                let by_name = self.users.find_by_partial_name(name).await?;
                match query.role {
                    Some(role) => by_name.into_iter().filter(|u| u.role == role).collect(),
                    None => by_name,
                }
            }
            (None, Some(role)) => self.users.find_by_role(role).await?,
            (None, None) => self.users.find_all().await?,
        };

        Ok(users.into_iter().map(User::redacted).collect())
    }

    pub async fn update_user(
        &self,
        claims: &Claims,
        user_id: &str,
        patch: UpdateUserRequest,
    ) -> AppResult<User> {
        require_owner_or_faculty(claims, user_id)?;
        patch.validate()?;

        let mut user = self.load_user(user_id).await?;
        if let Some(first_name) = patch.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(role) = patch.role {
            // Only faculty may change roles, including their own.
            require_faculty(claims)?;
            user.role = role;
        }

        Ok(self.users.save(user).await?.redacted())
    }

    pub async fn delete_user(&self, claims: &Claims, user_id: &str) -> AppResult<()> {
        require_faculty(claims)?;
        if !self.users.delete(user_id).await? {
            return Err(AppError::NotFound(format!(
                "User with id '{}' not found",
                user_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::domain::UserRole;
    use crate::repositories::user_repository::MockUserRepository;
    use mockall::predicate::eq;

    fn service(users: MockUserRepository) -> UserService {
        let config = Config::test_config();
        UserService::new(
            Arc::new(users),
            Arc::new(JwtService::new(&config.jwt_secret, 1)),
        )
    }

    fn signup_request(username: &str) -> SignupRequest {
        SignupRequest {
            username: username.to_string(),
            password: "hunter22".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            role: UserRole::Student,
        }
    }

    #[test]
    fn test_hash_password_is_hex_sha256() {
        let digest = hash_password("hunter22");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, hash_password("hunter22"));
        assert_ne!(digest, hash_password("hunter23"));
    }

    #[actix_rt::test]
    async fn signup_issues_token_and_redacts_digest() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .with(eq("jdoe"))
            .returning(|_| Ok(None));
        users.expect_create().returning(Ok);

        let service = service(users);
        let response = service.signup(signup_request("jdoe")).await.unwrap();

        assert!(!response.token.is_empty());
        assert_eq!(response.user.username, "jdoe");
        assert!(response.user.password_digest.is_empty());
    }

    #[actix_rt::test]
    async fn signup_rejects_taken_username() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(User::test_student("jdoe"))));

        let service = service(users);
        let result = service.signup(signup_request("jdoe")).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[actix_rt::test]
    async fn signin_queries_by_digest_and_rejects_bad_credentials() {
        let expected_digest = hash_password("wrong-password");
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_credentials()
            .withf(move |username, digest| username == "jdoe" && digest == expected_digest)
            .returning(|_, _| Ok(None));

        let service = service(users);
        let result = service
            .signin(SigninRequest {
                username: "jdoe".to_string(),
                password: "wrong-password".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[actix_rt::test]
    async fn list_users_requires_faculty() {
        let service = service(MockUserRepository::new());
        let result = service
            .list_users(&Claims::test_student("s1"), UserQuery::default())
            .await;

        assert!(matches!(result, Err(AppError::PolicyViolation(_))));
    }

    #[actix_rt::test]
    async fn list_users_intersects_name_and_role_filters() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_partial_name().with(eq("do")).returning(|_| {
            Ok(vec![User::test_student("jdoe"), User::test_faculty("prof")])
        });

        let service = service(users);
        let listing = service
            .list_users(
                &Claims::test_faculty("admin"),
                UserQuery {
                    role: Some(UserRole::Faculty),
                    name: Some("do".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].role, UserRole::Faculty);
    }

    #[actix_rt::test]
    async fn update_user_role_change_requires_faculty() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|id| {
            let mut user = User::test_student("s1");
            user.id = id.to_string();
            Ok(Some(user))
        });

        let service = service(users);
        let result = service
            .update_user(
                &Claims::test_student("s1"),
                "s1",
                UpdateUserRequest {
                    role: Some(UserRole::Faculty),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::PolicyViolation(_))));
    }

    #[actix_rt::test]
    async fn update_user_rejects_other_students() {
        let service = service(MockUserRepository::new());
        let result = service
            .update_user(
                &Claims::test_student("s1"),
                "s2",
                UpdateUserRequest::default(),
            )
            .await;

        assert!(matches!(result, Err(AppError::PolicyViolation(_))));
    }
}

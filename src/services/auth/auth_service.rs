//! # 로그인 서비스
//!
//! 사용자명/비밀번호 로그인을 처리하고 액세스 토큰을 발급합니다.

use std::sync::Arc;

use crate::{
    core::errors::AppResult,
    domain::dto::users::{LoginRequest, TokenResponse, UserProfile},
    services::{auth::TokenService, users::UserService},
};

pub struct AuthService {
    users: Arc<UserService>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: Arc<UserService>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// 자격 증명을 검증하고 토큰과 프로필을 반환합니다.
    ///
    /// 잘못된 사용자명과 잘못된 비밀번호는 같은 401로 보고됩니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<TokenResponse> {
        let user = match self.users.verify_password(&request.username, &request.password).await {
            Ok(user) => user,
            Err(e) => {
                log::warn!("⚠️ 로그인 실패: {}", request.username);
                return Err(e);
            }
        };

        let access_token = self.tokens.issue_token(&user.username, Some(user.effective_role()))?;

        log::info!("🔓 로그인 성공: {}", user.username);

        Ok(TokenResponse::bearer(access_token, UserProfile::from(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::dto::users::CreateUserRequest;
    use crate::repositories::memory::MemoryUserStore;

    async fn service_with_user() -> (AuthService, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new("test-secret", 1));
        let users = Arc::new(UserService::new(
            Arc::new(MemoryUserStore::default()),
            tokens.clone(),
            4,
        ));
        users
            .create_user(CreateUserRequest {
                username: "carla".to_string(),
                password: "clave".to_string(),
                email: "carla@example.com".to_string(),
                name: "Carla".to_string(),
                country: "México".to_string(),
                city: "Monterrey".to_string(),
                company: Some("Acme".to_string()),
                role: Some("admin".to_string()),
            })
            .await
            .unwrap();

        (AuthService::new(users, tokens.clone()), tokens)
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_login_issues_token_with_role() {
        let (auth, tokens) = service_with_user().await;

        let response = auth.login(login("carla", "clave")).await.unwrap();
        let claims = tokens.verify_token(&response.access_token).unwrap();

        assert_eq!(claims.sub, "carla");
        assert_eq!(claims.rol, "admin");
        assert_eq!(response.user.company.as_deref(), Some("Acme"));
    }

    #[actix_web::test]
    async fn test_login_rejects_bad_credentials() {
        let (auth, _) = service_with_user().await;

        let wrong_password = auth.login(login("carla", "otra")).await.unwrap_err();
        let unknown_user = auth.login(login("nadie", "clave")).await.unwrap_err();

        assert!(matches!(wrong_password, AppError::AuthenticationError(_)));
        assert!(matches!(unknown_user, AppError::AuthenticationError(_)));
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 사용자 프로필 응답 DTO
///
/// 비밀번호 해시는 어떤 경우에도 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: String,
    pub country: String,
    pub city: String,
    pub company: Option<String>,
    pub rol: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let rol = user.effective_role().to_string();
        let User {
            username,
            email,
            name,
            country,
            city,
            company,
            ..
        } = user;

        Self {
            id,
            username,
            email,
            name,
            country,
            city,
            company,
            rol,
        }
    }
}

/// 토큰 발급 응답 DTO (회원가입, 로그인 공통)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

impl TokenResponse {
    pub fn bearer(access_token: String, user: UserProfile) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user,
        }
    }
}

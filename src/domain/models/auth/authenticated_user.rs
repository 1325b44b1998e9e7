use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::domain::models::token::TokenClaims;

/// JWT 토큰에서 추출된 사용자 정보
///
/// [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 요청 확장(extensions)에 저장하고,
/// 핸들러는 인자로 선언해 꺼내 씁니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자명 (토큰의 `sub`)
    pub username: String,

    /// 사용자 역할 (토큰의 `rol`)
    pub role: String,
}

impl AuthenticatedUser {
    /// 요청 경로의 사용자명과 일치하는지 확인
    pub fn is(&self, username: &str) -> bool {
        self.username == username
    }
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            username: claims.sub,
            role: claims.rol,
        }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 확장에 사용자가 없으면 401을 반환합니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "No autenticado".to_string(),
            ))),
        }
    }
}

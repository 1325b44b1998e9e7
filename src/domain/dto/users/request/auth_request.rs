//! 인증 요청관련 DTO
//!
//! 로그인 폼(`application/x-www-form-urlencoded`)의 `username`, `password`를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로컬 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "El nombre de usuario es obligatorio"))]
    pub username: String,

    #[validate(length(min = 1, message = "La contraseña es obligatoria"))]
    pub password: String,
}

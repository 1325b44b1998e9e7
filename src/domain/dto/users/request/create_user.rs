//! # 사용자 생성 요청 DTO
//!
//! 회원가입(`POST /users`) 요청 본문을 정의합니다.
//!
//! ## 검증 규칙
//!
//! ### 사용자명 (`username`)
//! - 길이: 1-50자
//! - 공백 문자 불가
//! - 유일성은 서비스 계층에서 별도 검증
//!
//! ### 이메일 (`email`)
//! - RFC 5322 표준 이메일 형식 준수
//! - 유일성은 서비스 계층에서 별도 검증
//!
//! ### 비밀번호 (`password`)
//! - 최소 길이: 1자 (강도 정책은 프론트엔드에서 처리)
//!
//! ### 역할 (`rol`)
//! - 선택 사항. 생략하면 `"usuario"`로 저장됨
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "username": "jperez",
//!   "password": "s3creto",
//!   "email": "jperez@example.com",
//!   "name": "Juan Pérez",
//!   "country": "Colombia",
//!   "city": "Medellín",
//!   "company": "Acme IoT",
//!   "rol": "usuario"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "El nombre de usuario debe tener entre 1 y 50 caracteres"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(length(min = 1, message = "La contraseña es obligatoria"))]
    pub password: String,

    #[validate(email(message = "El correo electrónico no es válido"))]
    pub email: String,

    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub name: String,

    pub country: String,

    pub city: String,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default, rename = "rol")]
    pub role: Option<String>,
}

/// 사용자명은 URL 경로(`/users/{username}`)에 그대로 쓰이므로 공백을 허용하지 않습니다.
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("invalid_username")
            .with_message("El nombre de usuario no puede contener espacios".into()));
    }
    Ok(())
}

//! JWT 인증 토큰 클레임
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자명)
/// - `rol`: 사용자 역할 (기본값 `"usuario"`)
/// - `jti`: 토큰 고유 ID (UUID v4)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub rol: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

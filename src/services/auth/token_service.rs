//! # JWT 토큰 서비스
//!
//! HS256 액세스 토큰의 발급과 검증을 담당합니다.
//! 비밀 키와 만료 시간은 생성 시점에 [`JwtConfig`]에서 한 번 읽어 보관합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    config::JwtConfig,
    core::errors::{AppError, AppResult},
    domain::{entities::users::DEFAULT_ROLE, models::token::TokenClaims},
};

/// JWT 발급/검증 서비스
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_hours,
        }
    }

    /// 환경 변수(`JWT_SECRET`, `JWT_EXPIRATION_HOURS`)로 생성합니다.
    pub fn from_config() -> Self {
        Self::new(&JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 액세스 토큰을 발급합니다.
    ///
    /// 역할이 없거나 비어 있으면 `"usuario"`가 기록됩니다.
    pub fn issue_token(&self, username: &str, role: Option<&str>) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: username.to_string(),
            rol: role
                .filter(|r| !r.is_empty())
                .unwrap_or(DEFAULT_ROLE)
                .to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 토큰 서명과 만료를 검증하고 클레임을 반환합니다.
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token expirado".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("Token inválido".to_string())
                }
            })
    }

    /// `Authorization` 헤더 값에서 `Bearer ` 접두사를 제거합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError(
                "Formato de autorización inválido".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 1)
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = service();
        let token = tokens.issue_token("ana", Some("admin")).unwrap();
        let claims = tokens.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "ana");
        assert_eq!(claims.rol, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_role_defaults_to_usuario() {
        let tokens = service();

        let claims = tokens.verify_token(&tokens.issue_token("ana", None).unwrap()).unwrap();
        assert_eq!(claims.rol, "usuario");

        let claims = tokens.verify_token(&tokens.issue_token("ana", Some("")).unwrap()).unwrap();
        assert_eq!(claims.rol, "usuario");
    }

    #[test]
    fn test_each_token_has_unique_jti() {
        let tokens = service();
        let a = tokens.verify_token(&tokens.issue_token("ana", None).unwrap()).unwrap();
        let b = tokens.verify_token(&tokens.issue_token("ana", None).unwrap()).unwrap();

        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_expired_token_rejected() {
        let expired = TokenService::new("test-secret", -2);
        let token = expired.issue_token("ana", None).unwrap();

        let err = service().verify_token(&token).unwrap_err();
        assert!(matches!(err, AppError::AuthenticationError(msg) if msg == "Token expirado"));
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let other = TokenService::new("other-secret", 1);
        let token = other.issue_token("ana", None).unwrap();

        assert!(matches!(
            service().verify_token(&token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let tokens = service();

        assert_eq!(tokens.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(tokens.extract_bearer_token("Basic abc").is_err());
        assert!(tokens.extract_bearer_token("Bearer ").is_err());
    }
}

//! # Authentication Configuration Module
//!
//! JWT 토큰 발급/검증에 필요한 설정을 관리합니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! 프로덕션 환경에서는 `JWT_SECRET`이 반드시 설정되어야 하며,
//! 없으면 [`JwtConfig::ensure_secret`]이 서버 시작을 거부합니다.

use std::env;

use crate::config::Environment;

const DEV_SECRET: &str = "your-secret-key";

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEV_SECRET.to_string()
            })
    }

    /// 현재 환경에서 기본 비밀 키로 시작해도 되는지 확인합니다.
    ///
    /// `JWT_SECRET`이 없고 환경이 `Production`이면 에러를 반환합니다.
    pub fn ensure_secret() -> Result<(), String> {
        Self::check_secret(env::var("JWT_SECRET").ok().as_deref(), &Environment::current())
    }

    fn check_secret(secret: Option<&str>, environment: &Environment) -> Result<(), String> {
        match secret {
            Some(s) if !s.trim().is_empty() => Ok(()),
            _ if *environment == Environment::Production => {
                Err("JWT_SECRET이 설정되지 않았습니다 (production)".to_string())
            }
            _ => Ok(()),
        }
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

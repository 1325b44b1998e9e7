//! 인증 관련 서비스
//!
//! - [`TokenService`]: JWT 발급/검증
//! - [`AuthService`]: 사용자명/비밀번호 로그인

pub mod token_service;
pub mod auth_service;

pub use token_service::TokenService;
pub use auth_service::AuthService;

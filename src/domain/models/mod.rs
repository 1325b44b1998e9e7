//! # Domain Models
//!
//! 영속화되지 않는 도메인 모델입니다.
//!
//! - [`auth`]: 요청 단위 인증 컨텍스트 ([`AuthenticatedUser`], [`AuthMode`])
//! - [`token`]: JWT 클레임 ([`TokenClaims`])

pub mod auth;
pub mod token;

pub use auth::{AuthMode, AuthenticatedUser};
pub use token::TokenClaims;

//! HTTP 미들웨어
//!
//! - [`AuthMiddleware`]: JWT Bearer 인증 (required / optional)

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;

//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! - [`errors`] - `AppError`, `AppResult`, `ErrorContext`

pub mod errors;

pub use errors::*;

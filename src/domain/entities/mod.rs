//! 도메인 엔티티 모듈
//!
//! MongoDB 컬렉션에 그대로 저장되는 문서 모델을 정의합니다.
//!
//! - [`users`] - `usuarios` 컬렉션
//! - [`variables`] - `variables` 컬렉션

pub mod users;
pub mod variables;
